//! Navigation state machine and resolved routes.
//!
//! # States
//! - Idle: no navigation has run yet
//! - Pending: match lookup and lazy load in flight
//! - Settled: active route bound, unresolved, or failed
//!
//! # State Transitions
//! ```text
//! Idle → Pending → Settled
//! Settled → Pending (next navigation) → Settled
//! ```
//!
//! # Design Decisions
//! - Pending → Settled is the only transition per navigation; no retry
//! - A superseded navigation never writes state

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::navigation::location::Location;
use crate::routing::{Params, RouteDefinition};
use crate::views::{Props, ViewRef};

/// A target matched to a route with its view loaded.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    pub route: Arc<RouteDefinition>,
    pub location: Location,
    pub params: Params,
    pub view: ViewRef,
    /// Input properties for the view, present only in props mode.
    pub props: Option<Props>,
}

impl ResolvedRoute {
    pub fn name(&self) -> &str {
        self.route.name()
    }

    /// Render the view with its props (or none).
    pub fn render(&self) -> String {
        match &self.props {
            Some(props) => self.view.render(props),
            None => self.view.render(&Props::new()),
        }
    }
}

/// The route the rendering layer currently shows.
#[derive(Debug, Clone)]
pub struct ActiveRoute {
    pub navigation_id: Uuid,
    pub resolved: ResolvedRoute,
}

impl ActiveRoute {
    pub fn name(&self) -> &str {
        self.resolved.name()
    }

    pub fn location(&self) -> &Location {
        &self.resolved.location
    }

    pub fn params(&self) -> &Params {
        &self.resolved.params
    }

    pub fn props(&self) -> Option<&Props> {
        self.resolved.props.as_ref()
    }

    pub fn render(&self) -> String {
        self.resolved.render()
    }

    /// Serializable snapshot for logs and CLI output.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            navigation_id: self.navigation_id,
            name: self.name().to_string(),
            pattern: self.resolved.route.path().to_string(),
            location: self.resolved.location.clone(),
            params: self.resolved.params.clone(),
            props: self.resolved.props.clone(),
            view: self.resolved.view.name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub navigation_id: Uuid,
    pub name: String,
    pub pattern: String,
    pub location: Location,
    pub params: Params,
    pub props: Option<Props>,
    pub view: &'static str,
}

/// How a navigation settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// A route was activated.
    Active { route: String },
    /// No route matched the target.
    Unresolved { target: String },
    /// The target matched but could not be shown.
    Failed { target: String, reason: String },
}

/// Router-wide navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    Idle,
    Pending { navigation_id: Uuid, target: String },
    Settled { navigation_id: Uuid, outcome: Settled },
}

impl NavigationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, NavigationState::Pending { .. })
    }
}
