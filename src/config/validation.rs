//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the verb vocabulary is usable
//! - Validate value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("verb at index {0} is empty")]
    EmptyVerb(usize),

    #[error("verb `{0}` contains whitespace or `/`")]
    MalformedVerb(String),

    #[error("verb `{0}` is listed more than once")]
    DuplicateVerb(String),

    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("bench.iterations must be greater than zero")]
    ZeroIterations,
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, verb) in config.verbs.iter().enumerate() {
        if verb.is_empty() {
            errors.push(ValidationError::EmptyVerb(index));
        } else if verb.chars().any(|c| c.is_whitespace() || c == '/') {
            errors.push(ValidationError::MalformedVerb(verb.clone()));
        } else if !seen.insert(verb.as_str()) {
            errors.push(ValidationError::DuplicateVerb(verb.clone()));
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if config.bench.iterations == 0 {
        errors.push(ValidationError::ZeroIterations);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
