//! Segment-at-a-time request router.
//!
//! Handlers describe the tree lazily: matching a segment runs its handler,
//! which registers the candidates for the next segment.
//!
//! ```
//! use segment_router::{Filters, Router};
//!
//! let router: Router<String> = Router::new(|root| {
//!     root.path("profile", |level, _| {
//!         level.path_with("overview", "GET", |_, _| Ok(Some("overview".to_string())));
//!         level.path_variable(r"^([0-9]+)$", |_, vars| {
//!             Ok(Some(format!("profile {}", &vars[0])))
//!         })?;
//!         Ok(None)
//!     });
//!     let read_only =
//!         Filters::new().before(|ctx| Ok((ctx.verb != "GET").then(|| "read only".to_string())));
//!     root.group(read_only, |admin| {
//!         admin.path("admin", |_, _| Ok(Some("admin".to_string())));
//!         Ok(())
//!     })?;
//!     Ok(())
//! });
//!
//! assert_eq!(router.route("GET", "/profile/overview").unwrap(), "overview");
//! assert_eq!(router.route("GET", "/profile/12").unwrap(), "profile 12");
//! assert_eq!(router.route("POST", "/admin").unwrap(), "read only");
//! assert!(router.route("GET", "/nowhere").unwrap_err().is_not_found());
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod routing;
pub mod sitemap;

pub use config::RouterConfig;
pub use error::{BoxError, RouteError};
pub use routing::{Captures, FilterContext, Filters, Level, Outcome, Router, Verbs};
