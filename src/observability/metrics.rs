//! Routing metrics.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatches by outcome
//!   (`matched`, `not_found`, `unknown_verb`, `error`)
//! - `router_entries_matched_total` (counter): entries entered by kind
//!   (`exact`, `pattern`, `empty`, `not_found`)

/// Record the outcome of one `route` call.
pub fn record_dispatch(outcome: &'static str) {
    ::metrics::counter!("router_dispatch_total", "outcome" => outcome).increment(1);
}

/// Record one matched entry.
pub fn record_entry_matched(kind: &'static str) {
    ::metrics::counter!("router_entries_matched_total", "kind" => kind).increment(1);
}
