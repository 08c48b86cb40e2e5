//! Resolution and navigation error definitions.

use thiserror::Error;

use crate::views::LoadError;

/// Why a target could not be resolved to a view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The target is not an absolute in-app path.
    #[error("invalid navigation target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    /// No active route matches. There is no catch-all route.
    #[error("no route matches '{path}'")]
    NotFound { path: String },

    /// The matched route's lazy view failed to load.
    #[error("route '{route}' failed to load its view: {source}")]
    Load {
        route: String,
        #[source]
        source: LoadError,
    },
}

/// Why a navigation did not activate a route.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A newer navigation started while this one was pending.
    #[error("navigation to '{target}' was superseded by a newer navigation")]
    Cancelled { target: String },

    /// The target is already the active location.
    #[error("already at '{0}'")]
    Duplicated(String),

    /// Back/forward past the ends of the session history.
    #[error("no history entry at offset {0}")]
    NoHistoryEntry(isize),
}

impl NavigationError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationError::Resolve(ResolveError::InvalidTarget { .. }) => "invalid_target",
            NavigationError::Resolve(ResolveError::NotFound { .. }) => "not_found",
            NavigationError::Resolve(ResolveError::Load { .. }) => "load_failed",
            NavigationError::Cancelled { .. } => "cancelled",
            NavigationError::Duplicated(_) => "duplicated",
            NavigationError::NoHistoryEntry(_) => "no_history_entry",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationError::Resolve(ResolveError::NotFound { .. }))
    }
}
