//! Filter scopes.
//!
//! # Responsibilities
//! - Collect before/after filters declared by a grouping call
//! - Flatten nested scopes into the chain an entry captures
//! - Run the chains around a handler
//!
//! # Design Decisions
//! - A scope is a value, not router state: nesting builds a new chain from
//!   the parent's, so leaving a group never needs to pop anything
//! - Flattening order is outermost to innermost, registration order within
//! - Before-filters short-circuit; after-filters form a pipeline

use std::fmt;
use std::sync::Arc;

use crate::routing::route::{Captures, Outcome};

/// What a filter sees about the current match.
#[derive(Debug, Clone)]
pub struct FilterContext<'a> {
    /// Requested verb.
    pub verb: &'a str,
    /// Path as passed to `route`.
    pub path: &'a str,
    /// Segments consumed so far, joined by `/`.
    pub matched_path: String,
    /// Captures accumulated so far.
    pub variables: &'a Captures,
}

/// Runs before the handler; a value aborts the route with that value.
pub type BeforeFilter<T> = Arc<dyn Fn(&FilterContext<'_>) -> Outcome<T> + Send + Sync>;

/// Runs after the handler and may replace its result.
pub type AfterFilter<T> = Arc<dyn Fn(&FilterContext<'_>, Option<T>) -> Outcome<T> + Send + Sync>;

/// Filters declared by one grouping call.
pub struct Filters<T> {
    before: Vec<BeforeFilter<T>>,
    after: Vec<AfterFilter<T>>,
}

impl<T> Filters<T> {
    pub fn new() -> Self {
        Self {
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Append a before-filter.
    pub fn before<F>(mut self, filter: F) -> Self
    where
        F: Fn(&FilterContext<'_>) -> Outcome<T> + Send + Sync + 'static,
    {
        self.before.push(Arc::new(filter));
        self
    }

    /// Append an after-filter.
    pub fn after<F>(mut self, filter: F) -> Self
    where
        F: Fn(&FilterContext<'_>, Option<T>) -> Outcome<T> + Send + Sync + 'static,
    {
        self.after.push(Arc::new(filter));
        self
    }
}

impl<T> Default for Filters<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The flattened filters an entry runs, fixed at registration.
pub struct FilterChain<T> {
    before: Arc<[BeforeFilter<T>]>,
    after: Arc<[AfterFilter<T>]>,
}

impl<T> FilterChain<T> {
    /// Chain for a scope nested inside this one.
    pub(crate) fn nest(&self, filters: Filters<T>) -> Self {
        Self {
            before: self.before.iter().cloned().chain(filters.before).collect(),
            after: self.after.iter().cloned().chain(filters.after).collect(),
        }
    }

    pub fn before_len(&self) -> usize {
        self.before.len()
    }

    pub fn after_len(&self) -> usize {
        self.after.len()
    }

    /// Run before-filters in order until one yields a value.
    pub(crate) fn run_before(&self, context: &FilterContext<'_>) -> Outcome<T> {
        for filter in self.before.iter() {
            if let Some(value) = filter(context)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Thread `result` through every after-filter.
    pub(crate) fn run_after(&self, context: &FilterContext<'_>, result: Option<T>) -> Outcome<T> {
        self.after
            .iter()
            .try_fold(result, |current, filter| filter(context, current))
    }
}

impl<T> Default for FilterChain<T> {
    fn default() -> Self {
        Self {
            before: Arc::from(Vec::new()),
            after: Arc::from(Vec::new()),
        }
    }
}

impl<T> Clone for FilterChain<T> {
    fn clone(&self) -> Self {
        Self {
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

impl<T> fmt::Debug for FilterChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("before", &self.before.len())
            .field("after", &self.after.len())
            .finish()
    }
}
