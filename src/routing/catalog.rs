//! The match viewer's route table.
//!
//! | name      | path         | loading | props | enabled |
//! |-----------|--------------|---------|-------|---------|
//! | `home`    | `/`          | eager   | no    | yes     |
//! | `match`   | `/match/:id` | lazy    | yes   | yes     |
//! | `history` | `/history`   | lazy    | no    | yes     |
//! | `about`   | `/about`     | lazy    | no    | no      |
//! | `user`    | `/user/:id`  | lazy    | yes   | no      |

use std::sync::Arc;

use crate::routing::error::RouteError;
use crate::routing::route::RouteDefinition;
use crate::views::{
    AboutView, HistoryView, HomeView, MatchDetailView, UserView, ViewRef, ViewSource,
};

pub const HOME: &str = "home";
pub const MATCH: &str = "match";
pub const HISTORY: &str = "history";
pub const ABOUT: &str = "about";
pub const USER: &str = "user";

/// Every defined route name, enabled or not.
pub const ROUTE_NAMES: [&str; 5] = [HOME, MATCH, HISTORY, ABOUT, USER];

/// All route definitions, in match order. `about` and `user` are disabled.
pub fn match_viewer_routes() -> Result<Vec<RouteDefinition>, RouteError> {
    Ok(vec![
        RouteDefinition::new(HOME, "/", ViewSource::eager(HomeView))?,
        RouteDefinition::new(
            MATCH,
            "/match/:id",
            ViewSource::lazy("views/MatchDetail", || async {
                Ok(Arc::new(MatchDetailView) as ViewRef)
            }),
        )?
        .with_props(true),
        RouteDefinition::new(
            HISTORY,
            "/history",
            ViewSource::lazy("views/History", || async {
                Ok(Arc::new(HistoryView) as ViewRef)
            }),
        )?,
        RouteDefinition::new(
            ABOUT,
            "/about",
            ViewSource::lazy("views/About", || async {
                Ok(Arc::new(AboutView) as ViewRef)
            }),
        )?
        .with_enabled(false),
        RouteDefinition::new(
            USER,
            "/user/:id",
            ViewSource::lazy("views/User", || async {
                Ok(Arc::new(UserView) as ViewRef)
            }),
        )?
        .with_props(true)
        .with_enabled(false),
    ])
}
