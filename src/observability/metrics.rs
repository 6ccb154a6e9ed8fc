//! Metrics collection.
//!
//! # Metrics
//! - `api_requests_handled_total` (counter): request lines emitted
//! - `api_request_interval_seconds` (gauge): the interval drawn at startup
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade only; no exporter is installed,
//!   so these are no-ops unless an embedding program installs a recorder

use crate::server::Interval;

/// Count one emitted request line.
pub fn record_request_handled() {
    metrics::counter!("api_requests_handled_total").increment(1);
}

/// Publish the interval drawn at startup.
pub fn record_interval(interval: Interval) {
    metrics::gauge!("api_request_interval_seconds").set(interval.secs() as f64);
}
