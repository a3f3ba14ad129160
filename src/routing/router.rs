//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Split the path into segments
//! - Walk segments left to right, one level per matched entry
//! - Run filter chains and handlers of matched entries
//! - Fall back to the empty and not-found entries, else report NotFound
//!
//! # Design Decisions
//! - The root registration is re-run for every dispatch; a `Router` holds no
//!   per-call state and can be shared across threads
//! - The first value produced at any depth is the result
//! - A segment that matches nothing stops the walk immediately
//! - Errors from handlers and filters are returned as-is

use std::fmt;
use std::sync::Arc;

use crate::config::RouterConfig;
use crate::error::RouteError;
use crate::observability::metrics;
use crate::routing::level::Level;
use crate::routing::route::{Candidates, Captures, RouteEntry};
use crate::routing::scope::FilterContext;
use crate::routing::verbs::Vocabulary;

/// Registration run at the root of every dispatch.
pub type Registration<T> = Arc<dyn Fn(&mut Level<'_, T>) -> Result<(), RouteError> + Send + Sync>;

/// Turns a path into segments.
pub type PathSplitter = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Default splitter: trims surrounding `/` and splits on the rest.
///
/// `""` and `"/"` have no segments. Interior empty segments are kept.
pub fn split_path(path: &str) -> Vec<String> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(str::to_string).collect()
}

/// A segment-at-a-time request router.
pub struct Router<T> {
    root: Registration<T>,
    vocabulary: Vocabulary,
    strict_verbs: bool,
    splitter: PathSplitter,
}

impl<T: 'static> Router<T> {
    /// Create a router whose top level is described by `root`.
    pub fn new<F>(root: F) -> Self
    where
        F: Fn(&mut Level<'_, T>) -> Result<(), RouteError> + Send + Sync + 'static,
    {
        Self {
            root: Arc::new(root),
            vocabulary: Vocabulary::default(),
            strict_verbs: false,
            splitter: Arc::new(split_path),
        }
    }

    /// Create a router with the verb settings of `config`.
    pub fn from_config<F>(config: &RouterConfig, root: F) -> Self
    where
        F: Fn(&mut Level<'_, T>) -> Result<(), RouteError> + Send + Sync + 'static,
    {
        Self::new(root)
            .with_verbs(config.verbs.iter().cloned())
            .strict_verbs(config.strict_verbs)
    }

    /// Set the verb vocabulary.
    pub fn with_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Vocabulary::new(verbs);
        self
    }

    /// Reject verbs outside the vocabulary at dispatch.
    pub fn strict_verbs(mut self, strict: bool) -> Self {
        self.strict_verbs = strict;
        self
    }

    /// Replace the path splitter.
    pub fn with_splitter<F>(mut self, splitter: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        self.splitter = Arc::new(splitter);
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Route `verb` + `path` to a value.
    ///
    /// # Errors
    ///
    /// - [`RouteError::NotFound`] if nothing accepted the request
    /// - [`RouteError::UnknownVerb`] if strict verbs are on and `verb` is unknown
    /// - any error raised by a handler, filter or registration
    pub fn route(&self, verb: &str, path: &str) -> Result<T, RouteError> {
        if self.strict_verbs && !self.vocabulary.knows(verb) {
            metrics::record_dispatch("unknown_verb");
            return Err(RouteError::UnknownVerb(verb.to_string()));
        }

        tracing::debug!(verb, path, "Dispatching");
        let result = self.dispatch(verb, path);

        match &result {
            Ok(_) => metrics::record_dispatch("matched"),
            Err(err) if err.is_not_found() => {
                tracing::debug!(verb, path, "No route");
                metrics::record_dispatch("not_found");
            }
            Err(err) => {
                tracing::debug!(verb, path, error = %err, "Routing failed");
                metrics::record_dispatch("error");
            }
        }
        result
    }

    fn dispatch(&self, verb: &str, path: &str) -> Result<T, RouteError> {
        let segments = (self.splitter)(path);
        let mut candidates = Candidates::default();
        (self.root)(&mut Level::new(&mut candidates, &self.vocabulary))?;

        let mut walk = Walk {
            verb,
            path,
            segments: &segments,
            consumed: 0,
            captures: Captures::new(),
        };

        let mut stopped = false;
        for segment in &segments {
            let Some((entry, captured)) = candidates.lookup(segment, verb) else {
                tracing::trace!(segment = %segment, "Segment matches no entry");
                stopped = true;
                break;
            };

            walk.consumed += 1;
            walk.captures.extend(captured);
            let (child, result) = self.call_route(entry, &walk)?;
            if let Some(value) = result {
                return Ok(value);
            }
            candidates = child;
        }

        if !stopped {
            if let Some(entry) = candidates.empty_for(verb) {
                let (child, result) = self.call_route(entry, &walk)?;
                if let Some(value) = result {
                    return Ok(value);
                }
                candidates = child;
            }
        }

        if let Some(entry) = candidates.not_found() {
            let (_, result) = self.call_route(entry, &walk)?;
            if let Some(value) = result {
                return Ok(value);
            }
        }

        Err(walk.not_found())
    }

    /// Run `entry`: before-filters, handler into a fresh child level,
    /// after-filters. Returns the child level and the produced value.
    fn call_route(
        &self,
        entry: &RouteEntry<T>,
        walk: &Walk<'_>,
    ) -> Result<(Candidates<T>, Option<T>), RouteError> {
        metrics::record_entry_matched(entry.kind().label());
        let context = walk.context();
        tracing::debug!(
            entry = %entry.kind(),
            matched_path = %context.matched_path,
            captures = walk.captures.len(),
            "Entering route"
        );

        let mut child = Candidates::default();

        let filters = entry.filters();
        if let Some(value) = filters.run_before(&context).map_err(RouteError::from_boxed)? {
            tracing::debug!(entry = %entry.kind(), "Before-filter produced the result");
            return Ok((child, Some(value)));
        }

        let result = entry
            .handle(&mut Level::new(&mut child, &self.vocabulary), &walk.captures)
            .map_err(RouteError::from_boxed)?;
        let result = filters.run_after(&context, result).map_err(RouteError::from_boxed)?;

        if result.is_none() && child.is_empty() {
            tracing::trace!(
                entry = %entry.kind(),
                "Handler produced nothing and registered nothing"
            );
        }
        Ok((child, result))
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("vocabulary", &self.vocabulary)
            .field("strict_verbs", &self.strict_verbs)
            .finish_non_exhaustive()
    }
}

/// Per-dispatch traversal state.
struct Walk<'a> {
    verb: &'a str,
    path: &'a str,
    segments: &'a [String],
    consumed: usize,
    captures: Captures,
}

impl Walk<'_> {
    fn context(&self) -> FilterContext<'_> {
        FilterContext {
            verb: self.verb,
            path: self.path,
            matched_path: self.segments[..self.consumed].join("/"),
            variables: &self.captures,
        }
    }

    fn not_found(&self) -> RouteError {
        RouteError::NotFound {
            verb: self.verb.to_string(),
            path: self.path.to_string(),
        }
    }
}
