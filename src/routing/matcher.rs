//! Segment pattern matching.
//!
//! # Responsibilities
//! - Compile user regexes into segment matchers
//! - Match one path segment at a time, never the remaining path
//! - Extract capturing groups left to right
//!
//! # Design Decisions
//! - A pattern must span the whole segment: it is compiled as `^(?:...)$`
//!   once the raw pattern is known to be valid on its own
//! - A trailing `(?x)` comment would swallow the closing `)$`, so the
//!   wrapper is retried with a line break ending the comment
//! - Compilation is bounded by a regex size limit
//! - Groups that did not participate in the match capture `""` so positions
//!   stay stable

use regex::{Regex, RegexBuilder};

use crate::error::RouteError;

/// Maximum compiled size of a single segment pattern (in bytes).
const MAX_PATTERN_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled pattern matched against a single path segment.
#[derive(Debug, Clone)]
pub struct SegmentPattern {
    source: String,
    regex: Regex,
}

impl SegmentPattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] if the regex does not compile.
    pub fn new(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |source: regex::Error| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        // A pattern that compiles alone has balanced groups.
        build(pattern).map_err(invalid)?;

        let regex = build(&format!("^(?:{pattern})$"))
            .or_else(|_| build(&format!("^(?:{pattern}\n)$")))
            .map_err(invalid)?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of capturing groups the pattern defines.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Match `segment`, returning its captured groups in order.
    pub fn captures(&self, segment: &str) -> Option<Vec<String>> {
        self.regex.captures(segment).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect()
        })
    }
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .size_limit(MAX_PATTERN_REGEX_SIZE)
        .build()
}
