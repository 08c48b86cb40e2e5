//! Client-side router for the match viewer single-page app.
//!
//! Maps navigation targets to views through an immutable route table,
//! loads lazily registered views on first use and keeps session history.

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::schema::RouterConfig;
pub use navigation::{ActiveRoute, NavigationError, ResolveError, ResolvedRoute, Router};
pub use routing::{Params, RouteDefinition, RouteError, RouteTable};
pub use views::{View, ViewRef, ViewSource};
