//! Eager and lazy view sources.
//!
//! # Responsibilities
//! - Hold a route's view either ready-made or behind an async loader
//! - Run the loader on first use, bounded by a timeout
//! - Cache the loaded view for later navigations
//!
//! # Design Decisions
//! - Concurrent first loads share one loader run (`OnceCell`)
//! - Failures are returned, never cached, never retried internally

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::{BoxFuture, FutureExt};
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::observability::metrics;
use crate::views::{View, ViewRef};

/// Errors raised while loading a lazy view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The loader itself reported a failure.
    #[error("failed to load view module '{module}': {reason}")]
    Failed { module: String, reason: String },

    /// The loader did not finish within the configured timeout.
    #[error("loading view module '{module}' timed out after {timeout_ms} ms")]
    Timeout { module: String, timeout_ms: u64 },
}

impl LoadError {
    /// Convenience constructor for loader implementations.
    pub fn failed(module: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::Failed {
            module: module.into(),
            reason: reason.into(),
        }
    }
}

type Loader = Arc<dyn Fn() -> BoxFuture<'static, Result<ViewRef, LoadError>> + Send + Sync>;

/// A view loaded on first navigation to its route.
pub struct LazyView {
    module: String,
    loader: Loader,
    loaded: OnceCell<ViewRef>,
    attempts: AtomicUsize,
}

impl LazyView {
    /// Wrap an async loader for the named module.
    pub fn new<F, Fut>(module: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewRef, LoadError>> + Send + 'static,
    {
        Self {
            module: module.into(),
            loader: Arc::new(move || loader().boxed()),
            loaded: OnceCell::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Module identifier, e.g. `views/MatchDetail`.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// True once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Number of times the loader has been invoked.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Load the view, or return the cached one.
    pub async fn load(&self, timeout: Duration) -> Result<ViewRef, LoadError> {
        if let Some(view) = self.loaded.get() {
            return Ok(view.clone());
        }

        let view = self
            .loaded
            .get_or_try_init(|| async {
                self.attempts.fetch_add(1, Ordering::Relaxed);
                let start = Instant::now();
                tracing::debug!(module = %self.module, "Loading view module");

                let result = match tokio::time::timeout(timeout, (self.loader)()).await {
                    Ok(result) => result,
                    Err(_) => Err(LoadError::Timeout {
                        module: self.module.clone(),
                        timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    }),
                };

                metrics::record_lazy_load(&self.module, result.is_ok(), start);
                match &result {
                    Ok(view) => tracing::debug!(
                        module = %self.module,
                        view = view.name(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "View module loaded"
                    ),
                    Err(e) => tracing::error!(module = %self.module, error = %e, "View module failed to load"),
                }
                result
            })
            .await?;

        Ok(view.clone())
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("module", &self.module)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Where a route's view comes from.
#[derive(Debug)]
pub enum ViewSource {
    /// Available immediately.
    Eager(ViewRef),
    /// Loaded on first navigation.
    Lazy(LazyView),
}

impl ViewSource {
    pub fn eager(view: impl View + 'static) -> Self {
        ViewSource::Eager(Arc::new(view))
    }

    pub fn lazy<F, Fut>(module: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewRef, LoadError>> + Send + 'static,
    {
        ViewSource::Lazy(LazyView::new(module, loader))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ViewSource::Lazy(_))
    }

    /// Produce the view, awaiting the loader only for lazy sources.
    pub async fn load(&self, timeout: Duration) -> Result<ViewRef, LoadError> {
        match self {
            ViewSource::Eager(view) => Ok(view.clone()),
            ViewSource::Lazy(lazy) => lazy.load(timeout).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{HistoryView, HomeView};
    use std::sync::atomic::AtomicBool;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_eager_source_never_suspends() {
        let source = ViewSource::eager(HomeView);
        assert!(!source.is_lazy());
        let view = source.load(TIMEOUT).await.unwrap();
        assert_eq!(view.name(), "Home");
    }

    #[tokio::test]
    async fn test_lazy_source_loads_once() {
        let lazy = LazyView::new("views/History", || async {
            Ok(Arc::new(HistoryView) as ViewRef)
        });
        assert!(!lazy.is_loaded());

        let first = lazy.load(TIMEOUT).await.unwrap();
        let second = lazy.load(TIMEOUT).await.unwrap();

        assert_eq!(first.name(), "History");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(lazy.attempts(), 1);
        assert!(lazy.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let healthy = Arc::new(AtomicBool::new(false));
        let flag = healthy.clone();
        let lazy = LazyView::new("views/History", move || {
            let ok = flag.load(Ordering::SeqCst);
            async move {
                if ok {
                    Ok(Arc::new(HistoryView) as ViewRef)
                } else {
                    Err(LoadError::failed("views/History", "network down"))
                }
            }
        });

        let err = lazy.load(TIMEOUT).await.unwrap_err();
        assert!(matches!(err, LoadError::Failed { .. }));
        assert!(!lazy.is_loaded());

        healthy.store(true, Ordering::SeqCst);
        assert!(lazy.load(TIMEOUT).await.is_ok());
        assert_eq!(lazy.attempts(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_load_times_out() {
        let lazy = LazyView::new("views/Slow", || async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Arc::new(HistoryView) as ViewRef)
        });

        let err = lazy.load(Duration::from_millis(50)).await.unwrap_err();
        assert_eq!(
            err,
            LoadError::Timeout {
                module: "views/Slow".into(),
                timeout_ms: 50
            }
        );
    }
}
