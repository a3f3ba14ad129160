//! Shared fixtures for the routing integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use segment_router::{Captures, Level, Outcome, Router};

/// Verbs every fixture router is configured with.
pub const VERBS: [&str; 2] = ["get", "post"];

/// A handler that always yields `value`.
pub fn reply(
    value: &'static str,
) -> impl Fn(&mut Level<'_, String>, &Captures) -> Outcome<String> + Send + Sync + 'static {
    move |_, _| Ok(Some(value.to_string()))
}

/// A shared counter for observing side effects of handlers and filters.
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// `testpath` → `tjo`, `subpath<N>` → `secondpath<M>`.
pub fn nested_variable_router() -> Router<String> {
    Router::new(|root| {
        root.path("testpath", |level, _| {
            level.path("tjo", reply("tjo"));
            level.path_variable(r"^subpath([0-9]+)$", |sub, _| {
                sub.path_variable(r"^secondpath([0-9]+)$", |_, vars| {
                    Ok(Some(format!("secondpath{}x{}", &vars[0], &vars[1])))
                })?;
                Ok(None)
            })?;
            Ok(None)
        });
        Ok(())
    })
    .with_verbs(VERBS)
}
