//! Route entries and the per-level candidate table.
//!
//! # Design Decisions
//! - Entries are immutable once registered; handlers and filters are shared
//!   via `Arc`, so cloning an entry is cheap
//! - The kind is a tagged variant: an entry is exact, pattern or one of the
//!   two fallbacks, never more than one
//! - Empty and not-found fallbacks live in dedicated slots, not in the exact
//!   map, so a literal `:empty:` segment cannot collide with them

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::error::BoxError;
use crate::routing::level::Level;
use crate::routing::matcher::SegmentPattern;
use crate::routing::scope::FilterChain;
use crate::routing::verbs::Verbs;

/// What a handler or filter produces: a value ends routing, `None` continues.
pub type Outcome<T> = Result<Option<T>, BoxError>;

/// A route handler. Receives the next level to populate and the captures so far.
pub type Handler<T> = Arc<dyn Fn(&mut Level<'_, T>, &Captures) -> Outcome<T> + Send + Sync>;

/// Pattern captures accumulated along a traversal, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures(Vec<String>);

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The capture at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn extend(&mut self, captured: Vec<String>) {
        self.0.extend(captured);
    }
}

impl Index<usize> for Captures {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl From<Vec<String>> for Captures {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// How an entry is selected.
#[derive(Debug, Clone)]
pub enum EntryKind {
    /// Literal segment.
    Exact(String),
    /// Regex matched against one segment.
    Pattern(SegmentPattern),
    /// Path fully consumed.
    Empty,
    /// Traversal could not advance.
    NotFound,
}

impl EntryKind {
    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Exact(_) => "exact",
            EntryKind::Pattern(_) => "pattern",
            EntryKind::Empty => "empty",
            EntryKind::NotFound => "not_found",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Exact(segment) => write!(f, "{segment}"),
            EntryKind::Pattern(pattern) => write!(f, "{}", pattern.as_str()),
            EntryKind::Empty => write!(f, ":empty:"),
            EntryKind::NotFound => write!(f, ":notfound:"),
        }
    }
}

/// A registered route.
pub struct RouteEntry<T> {
    kind: EntryKind,
    verbs: Verbs,
    handler: Handler<T>,
    filters: FilterChain<T>,
}

impl<T> RouteEntry<T> {
    pub(crate) fn new(
        kind: EntryKind,
        verbs: Verbs,
        handler: Handler<T>,
        filters: FilterChain<T>,
    ) -> Self {
        Self {
            kind,
            verbs,
            handler,
            filters,
        }
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn verbs(&self) -> &Verbs {
        &self.verbs
    }

    /// Filters captured from the enclosing scopes at registration.
    pub fn filters(&self) -> &FilterChain<T> {
        &self.filters
    }

    pub(crate) fn handle(&self, level: &mut Level<'_, T>, captures: &Captures) -> Outcome<T> {
        (self.handler)(level, captures)
    }
}

impl<T> Clone for RouteEntry<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            verbs: self.verbs.clone(),
            handler: self.handler.clone(),
            filters: self.filters.clone(),
        }
    }
}

impl<T> fmt::Debug for RouteEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("kind", &self.kind)
            .field("verbs", &self.verbs)
            .field("filters", &self.filters)
            .finish_non_exhaustive()
    }
}

/// Candidate routes for the segment currently being matched.
pub(crate) struct Candidates<T> {
    pub(crate) exact: HashMap<String, RouteEntry<T>>,
    pub(crate) patterns: Vec<RouteEntry<T>>,
    pub(crate) empty: Option<RouteEntry<T>>,
    pub(crate) not_found: Option<RouteEntry<T>>,
}

impl<T> Default for Candidates<T> {
    fn default() -> Self {
        Self {
            exact: HashMap::new(),
            patterns: Vec::new(),
            empty: None,
            not_found: None,
        }
    }
}

impl<T> Candidates<T> {
    /// Select the entry for `segment`.
    ///
    /// An exact entry accepting `verb` wins. Otherwise patterns are tried in
    /// registration order, including when an exact entry exists but rejects
    /// the verb.
    pub(crate) fn lookup(
        &self,
        segment: &str,
        verb: &str,
    ) -> Option<(&RouteEntry<T>, Vec<String>)> {
        if let Some(entry) = self.exact.get(segment) {
            if entry.verbs.accepts(verb) {
                return Some((entry, Vec::new()));
            }
            tracing::trace!(segment, verb, "Exact entry rejects verb, scanning patterns");
        }

        self.patterns.iter().find_map(|entry| {
            let EntryKind::Pattern(pattern) = &entry.kind else {
                return None;
            };
            pattern
                .captures(segment)
                .filter(|_| entry.verbs.accepts(verb))
                .map(|captured| (entry, captured))
        })
    }

    /// The empty fallback, if it accepts `verb`.
    pub(crate) fn empty_for(&self, verb: &str) -> Option<&RouteEntry<T>> {
        self.empty.as_ref().filter(|entry| entry.verbs.accepts(verb))
    }

    pub(crate) fn not_found(&self) -> Option<&RouteEntry<T>> {
        self.not_found.as_ref()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.exact.is_empty()
            && self.patterns.is_empty()
            && self.empty.is_none()
            && self.not_found.is_none()
    }
}
