//! Error types surfaced by registration and dispatch.

use thiserror::Error;

/// Boxed error raised by user handlers and filters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while registering or routing.
#[derive(Debug, Error)]
pub enum RouteError {
    /// No exact, pattern, empty or not-found entry accepted the request.
    #[error("No route: {verb} {path}")]
    NotFound { verb: String, path: String },

    /// A segment pattern failed to compile.
    #[error("Invalid segment pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The verb is outside the configured vocabulary and strict verbs are on.
    #[error("Unknown verb: {0}")]
    UnknownVerb(String),

    /// Raised by a handler or filter; passed through untouched.
    #[error(transparent)]
    Handler(BoxError),
}

impl RouteError {
    /// Recover a `RouteError` raised inside user code, otherwise wrap the
    /// error as a handler failure.
    pub(crate) fn from_boxed(err: BoxError) -> Self {
        match err.downcast::<RouteError>() {
            Ok(route_err) => *route_err,
            Err(other) => RouteError::Handler(other),
        }
    }

    /// True for the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}
