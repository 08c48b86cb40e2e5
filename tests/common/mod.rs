//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

use match_router::config::{HistoryMode, RouterConfig};
use match_router::views::{HistoryView, LoadError};
use match_router::{Router, ViewRef, ViewSource};

/// The match viewer router with in-memory history.
#[allow(dead_code)]
pub fn memory_router() -> Router {
    let mut config = RouterConfig::default();
    config.history.mode = HistoryMode::Memory;
    Router::from_config(&config).unwrap()
}

/// A lazy view whose load blocks until `gate` is notified.
#[allow(dead_code)]
pub fn gated_view(module: &'static str, gate: Arc<Notify>) -> ViewSource {
    ViewSource::lazy(module, move || {
        let gate = gate.clone();
        async move {
            gate.notified().await;
            Ok(Arc::new(HistoryView) as ViewRef)
        }
    })
}

/// A lazy view whose load always fails.
#[allow(dead_code)]
pub fn failing_view(module: &'static str) -> ViewSource {
    ViewSource::lazy(module, move || async move {
        Err(LoadError::failed(module, "connection reset"))
    })
}

/// A lazy view that counts loader invocations.
#[allow(dead_code)]
pub fn counted_view(module: &'static str, calls: Arc<AtomicUsize>) -> ViewSource {
    ViewSource::lazy(module, move || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(Arc::new(HistoryView) as ViewRef) }
    })
}
