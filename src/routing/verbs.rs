//! Verb allow-lists and the router's verb vocabulary.
//!
//! # Design Decisions
//! - Verbs are compared exactly; case is whatever the caller uses
//! - An allow-list is never empty: an empty set collapses to `Any`

use std::collections::BTreeSet;

/// Verbs a route entry accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Verbs {
    /// No restriction.
    #[default]
    Any,
    /// Only the listed verbs.
    Only(BTreeSet<String>),
}

impl Verbs {
    /// Build an allow-list. An empty iterator yields [`Verbs::Any`].
    pub fn only<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = verbs.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Verbs::Any
        } else {
            Verbs::Only(set)
        }
    }

    /// Returns true if `verb` is accepted.
    pub fn accepts(&self, verb: &str) -> bool {
        match self {
            Verbs::Any => true,
            Verbs::Only(set) => set.contains(verb),
        }
    }

    /// Iterate the explicit verbs (empty for `Any`).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let set = match self {
            Verbs::Any => None,
            Verbs::Only(set) => Some(set),
        };
        set.into_iter().flatten().map(String::as_str)
    }
}

impl From<&str> for Verbs {
    fn from(verb: &str) -> Self {
        Verbs::only([verb])
    }
}

impl From<String> for Verbs {
    fn from(verb: String) -> Self {
        Verbs::only([verb])
    }
}

impl<const N: usize> From<[&str; N]> for Verbs {
    fn from(verbs: [&str; N]) -> Self {
        Verbs::only(verbs)
    }
}

impl From<&[&str]> for Verbs {
    fn from(verbs: &[&str]) -> Self {
        Verbs::only(verbs.iter().copied())
    }
}

impl From<Vec<String>> for Verbs {
    fn from(verbs: Vec<String>) -> Self {
        Verbs::only(verbs)
    }
}

/// The verbs a router is configured with.
///
/// An empty vocabulary places no constraint on registration or dispatch.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    verbs: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Returns true if `verb` is known, or if the vocabulary is empty.
    pub fn knows(&self, verb: &str) -> bool {
        self.verbs.is_empty() || self.verbs.contains(verb)
    }

    /// Verbs of `allowed` that this vocabulary does not contain.
    pub fn unknown<'a>(&'a self, allowed: &'a Verbs) -> impl Iterator<Item = &'a str> + 'a {
        allowed.iter().filter(move |verb| !self.knows(verb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_accepts_everything() {
        assert!(Verbs::Any.accepts("GET"));
        assert!(Verbs::Any.accepts("whatever"));
    }

    #[test]
    fn test_only_is_exact_membership() {
        let verbs = Verbs::from(["GET", "POST"]);
        assert!(verbs.accepts("GET"));
        assert!(verbs.accepts("POST"));
        assert!(!verbs.accepts("get")); // Case is not normalized
        assert!(!verbs.accepts("DELETE"));
    }

    #[test]
    fn test_empty_allow_list_is_any() {
        assert_eq!(Verbs::only(Vec::<String>::new()), Verbs::Any);
        assert_eq!(Verbs::from(Vec::<String>::new()), Verbs::Any);
    }

    #[test]
    fn test_vocabulary_unknown_verbs() {
        let vocab = Vocabulary::new(["GET", "POST"]);
        let verbs = Verbs::from(["GET", "PUT"]);
        let unknown: Vec<&str> = vocab.unknown(&verbs).collect();
        assert_eq!(unknown, vec!["PUT"]);

        assert!(Vocabulary::default().knows("ANYTHING"));
    }
}
