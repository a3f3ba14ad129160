//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Router::route(verb, path)
//!     → router.rs (split path, run root registration)
//!     → for each segment:
//!         route.rs (exact lookup, else patterns in order)
//!         matcher.rs (regex against the segment, collect captures)
//!         scope.rs (before-filters, may end routing)
//!         handler registers the next level via level.rs
//!         scope.rs (after-filters)
//!     → empty fallback if every segment was consumed
//!     → not-found fallback of the last level
//!     → Return: value or RouteError::NotFound
//! ```
//!
//! # Design Decisions
//! - The tree is never built up front: each handler describes only the level
//!   below the segment it matched
//! - Exact entries beat patterns; patterns are tried in registration order
//! - Verbs are a sum type (`Any` or an explicit set), see verbs.rs
//! - Filter scopes are values threaded through registration, not a stack

pub mod level;
pub mod matcher;
pub mod route;
pub mod router;
pub mod scope;
pub mod verbs;

pub use level::{IntoSegments, Level};
pub use matcher::SegmentPattern;
pub use route::{Captures, EntryKind, Handler, Outcome, RouteEntry};
pub use router::{split_path, PathSplitter, Registration, Router};
pub use scope::{AfterFilter, BeforeFilter, FilterChain, FilterContext, Filters};
pub use verbs::{Verbs, Vocabulary};
