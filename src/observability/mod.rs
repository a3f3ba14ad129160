//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing subsystem produces:
//!     → tracing events (dispatch, matched entries, fallbacks)
//!     → metrics.rs (dispatch outcomes, matched entry kinds)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr), installed by the binary
//!     → any `metrics` recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing subscribers/recorders is the
//!   application's choice
//! - Without a recorder, metric updates are no-ops

pub mod logging;
pub mod metrics;
