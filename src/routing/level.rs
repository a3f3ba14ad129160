//! Route registration for one level of the tree.
//!
//! # Responsibilities
//! - Build route entries and insert them into the level's candidates
//! - Capture the active filter scope into every entry
//! - Open nested filter scopes (`group`)
//!
//! # Design Decisions
//! - Last registration for a literal segment (or fallback slot) wins
//! - A handler's child level starts with an empty scope: groups apply to
//!   the routes registered inside them, not to their descendants

use std::sync::Arc;

use crate::error::RouteError;
use crate::routing::matcher::SegmentPattern;
use crate::routing::route::{Candidates, Captures, EntryKind, Handler, Outcome, RouteEntry};
use crate::routing::scope::{FilterChain, Filters};
use crate::routing::verbs::{Verbs, Vocabulary};

/// One or more literal segments sharing a handler.
pub trait IntoSegments {
    fn into_segments(self) -> Vec<String>;
}

impl IntoSegments for &str {
    fn into_segments(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoSegments for String {
    fn into_segments(self) -> Vec<String> {
        vec![self]
    }
}

impl<const N: usize> IntoSegments for [&str; N] {
    fn into_segments(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoSegments for &[&str] {
    fn into_segments(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoSegments for Vec<String> {
    fn into_segments(self) -> Vec<String> {
        self
    }
}

/// Registration handle for the candidates of one path segment.
///
/// Handlers receive the `Level` below the segment they matched and describe
/// the next segment by registering on it.
pub struct Level<'a, T> {
    candidates: &'a mut Candidates<T>,
    scope: FilterChain<T>,
    vocabulary: &'a Vocabulary,
}

impl<'a, T: 'static> Level<'a, T> {
    pub(crate) fn new(candidates: &'a mut Candidates<T>, vocabulary: &'a Vocabulary) -> Self {
        Self {
            candidates,
            scope: FilterChain::default(),
            vocabulary,
        }
    }

    /// Register literal segment(s), any verb.
    pub fn path<S, F>(&mut self, segments: S, handler: F) -> &mut Self
    where
        S: IntoSegments,
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        self.path_with(segments, Verbs::Any, handler)
    }

    /// Register literal segment(s) restricted to `verbs`.
    pub fn path_with<S, V, F>(&mut self, segments: S, verbs: V, handler: F) -> &mut Self
    where
        S: IntoSegments,
        V: Into<Verbs>,
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        let verbs = self.checked(verbs.into());
        let handler: Handler<T> = Arc::new(handler);

        for segment in segments.into_segments() {
            let entry = self.entry(
                EntryKind::Exact(segment.clone()),
                verbs.clone(),
                handler.clone(),
            );
            if self.candidates.exact.insert(segment.clone(), entry).is_some() {
                tracing::debug!(segment = %segment, "Replacing exact entry");
            }
        }
        self
    }

    /// Register the fallback for a fully consumed path, any verb.
    pub fn path_empty<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        self.path_empty_with(Verbs::Any, handler)
    }

    /// Register the fallback for a fully consumed path, restricted to `verbs`.
    pub fn path_empty_with<V, F>(&mut self, verbs: V, handler: F) -> &mut Self
    where
        V: Into<Verbs>,
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        let verbs = self.checked(verbs.into());
        let entry = self.entry(EntryKind::Empty, verbs, Arc::new(handler));
        self.candidates.empty = Some(entry);
        self
    }

    /// Register the fallback used when a segment at this level matches nothing.
    /// Not-found entries accept every verb.
    pub fn path_not_found<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        let entry = self.entry(EntryKind::NotFound, Verbs::Any, Arc::new(handler));
        self.candidates.not_found = Some(entry);
        self
    }

    /// Register a segment pattern, any verb.
    ///
    /// Capturing groups are appended to the captures handed to this handler,
    /// its filters and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] if `pattern` does not compile.
    pub fn path_variable<F>(&mut self, pattern: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        self.path_variable_with(pattern, Verbs::Any, handler)
    }

    /// Register a segment pattern restricted to `verbs`.
    pub fn path_variable_with<V, F>(
        &mut self,
        pattern: &str,
        verbs: V,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        V: Into<Verbs>,
        F: Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync + 'static,
    {
        let pattern = SegmentPattern::new(pattern)?;
        let verbs = self.checked(verbs.into());
        let entry = self.entry(EntryKind::Pattern(pattern), verbs, Arc::new(handler));
        self.candidates.patterns.push(entry);
        Ok(self)
    }

    /// Register routes inside a filter scope.
    ///
    /// `body` receives a level that shares this level's candidates but whose
    /// entries also capture `filters`. Scopes nest: inner entries run the
    /// outer filters first.
    pub fn group<F>(&mut self, filters: Filters<T>, body: F) -> Result<&mut Self, RouteError>
    where
        F: FnOnce(&mut Level<'_, T>) -> Result<(), RouteError>,
    {
        let mut nested = Level {
            candidates: &mut *self.candidates,
            scope: self.scope.nest(filters),
            vocabulary: self.vocabulary,
        };
        body(&mut nested)?;
        Ok(self)
    }

    /// Filters that entries registered here capture.
    pub fn scope(&self) -> &FilterChain<T> {
        &self.scope
    }

    fn entry(&self, kind: EntryKind, verbs: Verbs, handler: Handler<T>) -> RouteEntry<T> {
        RouteEntry::new(kind, verbs, handler, self.scope.clone())
    }

    fn checked(&self, verbs: Verbs) -> Verbs {
        let verbs = match verbs {
            Verbs::Only(set) if set.is_empty() => Verbs::Any,
            verbs => verbs,
        };
        for verb in self.vocabulary.unknown(&verbs) {
            tracing::warn!(verb, "Route registered for a verb outside the router vocabulary");
        }
        verbs
    }
}
