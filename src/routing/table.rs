//! Route lookup.
//!
//! # Responsibilities
//! - Store the ordered, validated route definitions
//! - Look up the first active route matching a path
//! - Return matched route or explicit no-match
//! - Generate paths from a route name and parameters
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc`, no locks)
//! - O(n) ordered scan (the table is small), first match wins
//! - Disabled routes are filtered out at construction and kept aside
//! - Explicit no-match rather than a silent default route

use std::sync::Arc;

use crate::routing::error::RouteError;
use crate::routing::matcher::Params;
use crate::routing::route::RouteDefinition;

/// Result of matching a path against the table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub route: Arc<RouteDefinition>,
    pub params: Params,
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    active: Vec<Arc<RouteDefinition>>,
    inactive: Vec<Arc<RouteDefinition>>,
    strict: bool,
}

impl RouteTable {
    /// Build the table, splitting disabled definitions out of the active set.
    ///
    /// Names must be unique across all definitions; active patterns must be
    /// pairwise distinct.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, RouteError> {
        let mut active: Vec<Arc<RouteDefinition>> = Vec::new();
        let mut inactive: Vec<Arc<RouteDefinition>> = Vec::new();

        for route in routes {
            let name_taken = active
                .iter()
                .chain(&inactive)
                .any(|existing| existing.name() == route.name());
            if name_taken {
                return Err(RouteError::DuplicateName(route.name().to_string()));
            }

            if !route.is_enabled() {
                inactive.push(Arc::new(route));
                continue;
            }

            if let Some(existing) = active
                .iter()
                .find(|existing| existing.pattern().same_shape(route.pattern()))
            {
                return Err(RouteError::DuplicatePath {
                    path: route.path().to_string(),
                    first: existing.name().to_string(),
                    second: route.name().to_string(),
                });
            }
            active.push(Arc::new(route));
        }

        tracing::debug!(
            active = active.len(),
            inactive = inactive.len(),
            "Route table built"
        );

        Ok(Self {
            active,
            inactive,
            strict: false,
        })
    }

    /// Reject a trailing slash that the pattern does not have.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Find the first active route matching `path`.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        self.active.iter().find_map(|route| {
            route.pattern().matches(path, self.strict).map(|params| RouteMatch {
                route: route.clone(),
                params,
            })
        })
    }

    /// Look up an active route by name.
    pub fn get(&self, name: &str) -> Option<&Arc<RouteDefinition>> {
        self.active.iter().find(|route| route.name() == name)
    }

    /// Generate the path for an active named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        route.pattern().build(name, params)
    }

    /// Active routes in match order.
    pub fn routes(&self) -> &[Arc<RouteDefinition>] {
        &self.active
    }

    /// Defined but disabled routes.
    pub fn inactive(&self) -> &[Arc<RouteDefinition>] {
        &self.inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{HistoryView, HomeView, MatchDetailView, ViewSource};

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteDefinition::new("home", "/", ViewSource::eager(HomeView)).unwrap(),
            RouteDefinition::new("match", "/match/:id", ViewSource::eager(MatchDetailView))
                .unwrap()
                .with_props(true),
            RouteDefinition::new("live", "/match/live", ViewSource::eager(MatchDetailView)).unwrap(),
            RouteDefinition::new("history", "/history", ViewSource::eager(HistoryView))
                .unwrap()
                .with_enabled(false),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        let m = table.match_path("/match/live").unwrap();
        assert_eq!(m.route.name(), "match");
        assert_eq!(m.params.get("id").map(String::as_str), Some("live"));
    }

    #[test]
    fn test_disabled_route_never_matches() {
        let table = table();
        assert!(table.match_path("/history").is_none());
        assert!(table.get("history").is_none());
        assert_eq!(table.inactive().len(), 1);
        assert_eq!(table.routes().len(), 3);
    }

    #[test]
    fn test_strict_mode() {
        assert!(table().match_path("/match/1/").is_some());
        assert!(table().with_strict(true).match_path("/match/1/").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RouteTable::new(vec![
            RouteDefinition::new("home", "/", ViewSource::eager(HomeView)).unwrap(),
            RouteDefinition::new("home", "/other", ViewSource::eager(HomeView))
                .unwrap()
                .with_enabled(false),
        ]);
        assert_eq!(result.unwrap_err(), RouteError::DuplicateName("home".into()));
    }

    #[test]
    fn test_duplicate_shape_rejected() {
        let result = RouteTable::new(vec![
            RouteDefinition::new("a", "/user/:id", ViewSource::eager(HomeView)).unwrap(),
            RouteDefinition::new("b", "/user/:uid", ViewSource::eager(HomeView)).unwrap(),
        ]);
        assert!(matches!(result, Err(RouteError::DuplicatePath { .. })));
    }

    #[test]
    fn test_href() {
        let table = table();
        let mut params = Params::new();
        params.insert("id".into(), "42".into());
        assert_eq!(table.href("match", &params).unwrap(), "/match/42");
        assert_eq!(table.href("home", &Params::new()).unwrap(), "/");
        assert_eq!(
            table.href("history", &Params::new()),
            Err(RouteError::UnknownRoute("history".into()))
        );
    }
}
