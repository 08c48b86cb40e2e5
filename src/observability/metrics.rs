//! Metrics collection.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by outcome
//! - `router_navigation_duration_seconds` (histogram): time to settle
//! - `router_resolutions_total` (counter): successful resolutions by route
//! - `router_not_found_total` (counter): targets no route matched
//! - `router_lazy_loads_total` (counter): lazy view loads by module, outcome
//! - `router_lazy_load_duration_seconds` (histogram): lazy load latency
//!
//! # Design Decisions
//! - Facade only; the embedding application installs a recorder
//! - Without a recorder every call is a no-op
//! - `observability.metrics_enabled = false` turns every call into a no-op

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use ::metrics::{counter, histogram};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn recording on or off process-wide. Enabled until told otherwise.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn record_navigation(outcome: &'static str, start: Instant) {
    if !is_enabled() {
        return;
    }
    counter!("router_navigations_total", "outcome" => outcome).increment(1);
    histogram!("router_navigation_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_resolution(route: &str) {
    if !is_enabled() {
        return;
    }
    counter!("router_resolutions_total", "route" => route.to_string()).increment(1);
}

pub fn record_not_found() {
    if !is_enabled() {
        return;
    }
    counter!("router_not_found_total").increment(1);
}

pub fn record_lazy_load(module: &str, ok: bool, start: Instant) {
    if !is_enabled() {
        return;
    }
    let outcome = if ok { "ok" } else { "error" };
    counter!(
        "router_lazy_loads_total",
        "module" => module.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("router_lazy_load_duration_seconds", "module" => module.to_string())
        .record(start.elapsed().as_secs_f64());
}
