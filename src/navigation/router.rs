//! The router instance: route table wired to a history strategy.
//!
//! # Responsibilities
//! - Resolve targets to routes and views (loading lazy views)
//! - Run navigations: push, replace, back/forward
//! - Hold the current active route and the navigation state
//! - Keep the previous route active when a navigation fails
//!
//! # Design Decisions
//! - Every navigation takes a generation number; a navigation that is
//!   overtaken while pending settles `Cancelled` and writes nothing
//! - The in-flight lazy load of a superseded navigation is not aborted
//! - History and current route are written together under one lock
//! - No catch-all route: unmatched targets are reported to the caller

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use arc_swap::{ArcSwap, ArcSwapOption};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::RouterConfig;
use crate::navigation::error::{NavigationError, ResolveError};
use crate::navigation::history::{self, History};
use crate::navigation::location::Location;
use crate::navigation::state::{ActiveRoute, NavigationState, ResolvedRoute, Settled};
use crate::observability::metrics;
use crate::routing::{catalog, Params, RouteError, RouteMatch, RouteTable};

/// Lazy view load timeout when none is configured.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
enum HistoryAction {
    Push,
    Replace,
    Traverse(isize),
}

impl HistoryAction {
    fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::Push => "push",
            HistoryAction::Replace => "replace",
            HistoryAction::Traverse(_) => "traverse",
        }
    }
}

/// Client-side router.
pub struct Router {
    table: Arc<RouteTable>,
    history: Mutex<Box<dyn History>>,
    current: ArcSwapOption<ActiveRoute>,
    state: ArcSwap<NavigationState>,
    generation: AtomicU64,
    load_timeout: Duration,
}

impl Router {
    /// Wire a route table to a history strategy.
    pub fn new(table: RouteTable, history: Box<dyn History>) -> Self {
        tracing::info!(
            history = ?history.mode(),
            active_routes = table.routes().len(),
            inactive_routes = table.inactive().len(),
            strict = table.is_strict(),
            "Router created"
        );

        Self {
            table: Arc::new(table),
            history: Mutex::new(history),
            current: ArcSwapOption::empty(),
            state: ArcSwap::from_pointee(NavigationState::Idle),
            generation: AtomicU64::new(0),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }

    /// Build the match viewer router from configuration, applying route
    /// feature flags before the table is frozen.
    pub fn from_config(config: &RouterConfig) -> Result<Self, RouteError> {
        let routes: Vec<_> = catalog::match_viewer_routes()?
            .into_iter()
            .map(|route| {
                match config.features.iter().find(|flag| flag.route == route.name()) {
                    Some(flag) => {
                        tracing::info!(
                            route = route.name(),
                            enabled = flag.enabled,
                            "Route feature flag applied"
                        );
                        route.with_enabled(flag.enabled)
                    }
                    None => route,
                }
            })
            .collect();

        let table = RouteTable::new(routes)?.with_strict(config.matching.strict);
        Ok(Self::new(table, history::from_config(&config.history))
            .with_load_timeout(config.loading.timeout()))
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a target without navigating.
    pub async fn resolve(&self, target: &str) -> Result<ResolvedRoute, ResolveError> {
        let location = Location::parse(target)?;
        self.resolve_location(location).await
    }

    /// Navigate to `target`, adding a history entry.
    pub async fn push(&self, target: &str) -> Result<Arc<ActiveRoute>, NavigationError> {
        let location = Location::parse(target)?;
        self.navigate(location, HistoryAction::Push).await
    }

    /// Navigate to `target`, replacing the current history entry.
    pub async fn replace(&self, target: &str) -> Result<Arc<ActiveRoute>, NavigationError> {
        let location = Location::parse(target)?;
        self.navigate(location, HistoryAction::Replace).await
    }

    /// Navigate to an address-bar URL, which includes the history base.
    pub async fn enter(&self, url: &str) -> Result<Arc<ActiveRoute>, NavigationError> {
        let target = self
            .history()
            .target_from_url(url)
            .map(str::to_string)
            .ok_or_else(|| ResolveError::InvalidTarget {
                target: url.to_string(),
                reason: "outside the history base".to_string(),
            })?;
        self.push(&target).await
    }

    pub async fn back(&self) -> Result<Arc<ActiveRoute>, NavigationError> {
        self.go(-1).await
    }

    pub async fn forward(&self) -> Result<Arc<ActiveRoute>, NavigationError> {
        self.go(1).await
    }

    /// Traverse session history by `delta` entries. The cursor only moves
    /// once the entry has resolved.
    pub async fn go(&self, delta: isize) -> Result<Arc<ActiveRoute>, NavigationError> {
        let location = self
            .history()
            .peek(delta)
            .cloned()
            .ok_or(NavigationError::NoHistoryEntry(delta))?;
        self.navigate(location, HistoryAction::Traverse(delta)).await
    }

    /// The route currently shown, if any navigation has succeeded.
    pub fn current(&self) -> Option<Arc<ActiveRoute>> {
        self.current.load_full()
    }

    pub fn state(&self) -> Arc<NavigationState> {
        self.state.load_full()
    }

    /// Address-bar URL for a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let path = self.table.href(name, params)?;
        Ok(self.history().url(&path))
    }

    /// Address-bar URL of the current history entry.
    pub fn address(&self) -> Option<String> {
        let history = self.history();
        history
            .current()
            .map(|location| history.url(&location.full_path()))
    }

    pub fn history_len(&self) -> usize {
        self.history().len()
    }

    fn history(&self) -> MutexGuard<'_, Box<dyn History>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn resolve_location(&self, location: Location) -> Result<ResolvedRoute, ResolveError> {
        let Some(RouteMatch { route, params }) = self.table.match_path(location.path()) else {
            metrics::record_not_found();
            return Err(ResolveError::NotFound {
                path: location.path().to_string(),
            });
        };

        tracing::debug!(route = route.name(), ?params, "Route matched");

        let view = route
            .component()
            .load(self.load_timeout)
            .await
            .map_err(|source| ResolveError::Load {
                route: route.name().to_string(),
                source,
            })?;

        metrics::record_resolution(route.name());
        let props = route.props_for(&params);
        Ok(ResolvedRoute {
            route,
            location,
            params,
            view,
            props,
        })
    }

    async fn navigate(
        &self,
        location: Location,
        action: HistoryAction,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        let navigation_id = Uuid::new_v4();
        let target = location.full_path();
        let span = tracing::info_span!(
            "navigation",
            id = %navigation_id,
            target = %target,
            action = action.as_str()
        );

        self.run_navigation(navigation_id, target, location, action)
            .instrument(span)
            .await
    }

    async fn run_navigation(
        &self,
        navigation_id: Uuid,
        target: String,
        location: Location,
        action: HistoryAction,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        let start = Instant::now();

        if !matches!(action, HistoryAction::Traverse(_)) {
            if let Some(current) = self.current.load_full() {
                if current.location() == &location {
                    tracing::debug!("Already at target");
                    metrics::record_navigation("duplicated", start);
                    return Err(NavigationError::Duplicated(target));
                }
            }
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.store(Arc::new(NavigationState::Pending {
            navigation_id,
            target: target.clone(),
        }));
        tracing::debug!("Navigation pending");

        let resolved = self.resolve_location(location).await;

        let mut history = self.history();
        if self.generation.load(Ordering::SeqCst) != generation {
            drop(history);
            tracing::info!("Navigation superseded by a newer one");
            metrics::record_navigation("cancelled", start);
            return Err(NavigationError::Cancelled { target });
        }

        let resolved = match resolved {
            Ok(resolved) => resolved,
            Err(error) => {
                // Targets are parsed before a navigation starts, so only a
                // failed load or a miss can reach here.
                let outcome = if let ResolveError::Load { .. } = &error {
                    tracing::error!(error = %error, "Navigation failed, keeping current route");
                    Settled::Failed {
                        target,
                        reason: error.to_string(),
                    }
                } else {
                    tracing::warn!(error = %error, "Navigation unresolved, keeping current route");
                    Settled::Unresolved { target }
                };
                self.state.store(Arc::new(NavigationState::Settled {
                    navigation_id,
                    outcome,
                }));
                let error = NavigationError::from(error);
                metrics::record_navigation(error.kind(), start);
                return Err(error);
            }
        };

        match action {
            HistoryAction::Push => history.push(resolved.location.clone()),
            HistoryAction::Replace => history.replace(resolved.location.clone()),
            HistoryAction::Traverse(delta) => {
                if history.go(delta).is_none() {
                    self.state.store(Arc::new(NavigationState::Settled {
                        navigation_id,
                        outcome: Settled::Failed {
                            target,
                            reason: "history entry disappeared".to_string(),
                        },
                    }));
                    metrics::record_navigation("no_history_entry", start);
                    return Err(NavigationError::NoHistoryEntry(delta));
                }
            }
        }
        let address = history.url(&resolved.location.full_path());

        let active = Arc::new(ActiveRoute {
            navigation_id,
            resolved,
        });
        self.current.store(Some(active.clone()));
        self.state.store(Arc::new(NavigationState::Settled {
            navigation_id,
            outcome: Settled::Active {
                route: active.name().to_string(),
            },
        }));
        drop(history);

        tracing::info!(
            route = active.name(),
            address = %address,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Navigation settled"
        );
        metrics::record_navigation("active", start);
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HistoryMode;
    use crate::routing::catalog::{HISTORY, HOME, MATCH};

    fn router() -> Router {
        let mut config = RouterConfig::default();
        config.history.mode = HistoryMode::Memory;
        Router::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_literal_routes() {
        let router = router();

        let home = router.resolve("/").await.unwrap();
        assert_eq!(home.name(), HOME);
        assert!(home.params.is_empty());

        let history = router.resolve("/history").await.unwrap();
        assert_eq!(history.name(), HISTORY);
        assert!(history.params.is_empty());
        assert!(history.props.is_none());
    }

    #[tokio::test]
    async fn test_resolve_match_passes_id_prop() {
        let router = router();
        for id in ["42", "abc", "2024-final", "x"] {
            let resolved = router.resolve(&format!("/match/{id}")).await.unwrap();
            assert_eq!(resolved.name(), MATCH);
            assert_eq!(resolved.params.get("id").map(String::as_str), Some(id));
            assert_eq!(resolved.props, Some(resolved.params.clone()));
            assert_eq!(resolved.render(), format!("MatchDetail(id={id})"));
        }
    }

    #[tokio::test]
    async fn test_resolve_unmatched() {
        let router = router();
        for path in ["/match/", "/match/a/b", "/about", "/user/1", "/unknown-path"] {
            let err = router.resolve(path).await.unwrap_err();
            assert!(
                matches!(err, ResolveError::NotFound { .. }),
                "{path} should be unmatched, got {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_does_not_navigate() {
        let router = router();
        router.resolve("/history").await.unwrap();
        assert!(router.current().is_none());
        assert_eq!(router.history_len(), 0);
        assert_eq!(*router.state(), NavigationState::Idle);
    }

    #[tokio::test]
    async fn test_feature_flag_enables_disabled_route() {
        let mut config = RouterConfig::default();
        config.history.mode = HistoryMode::Memory;
        config.features.push(crate::config::FeatureFlag {
            route: "about".into(),
            enabled: true,
        });
        let router = Router::from_config(&config).unwrap();

        assert_eq!(router.resolve("/about").await.unwrap().name(), "about");
        assert!(router.resolve("/user/1").await.is_err());
    }

    #[tokio::test]
    async fn test_href_uses_history_base() {
        let mut config = RouterConfig::default();
        config.history.base = "/app".into();
        let router = Router::from_config(&config).unwrap();

        let mut params = Params::new();
        params.insert("id".into(), "42".into());
        assert_eq!(router.href(MATCH, &params).unwrap(), "/app/match/42");
        assert_eq!(
            router.href("about", &Params::new()),
            Err(RouteError::UnknownRoute("about".into()))
        );
    }
}
