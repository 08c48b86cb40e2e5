//! Route table error definitions.

use thiserror::Error;

/// Errors raised while building the route table or generating paths.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The path pattern is malformed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two definitions share a name.
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    /// Two active definitions would match the same paths.
    #[error("route '{second}' has the same path pattern as route '{first}' ({path})")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// Reverse lookup for a name with no active definition.
    #[error("no active route named '{0}'")]
    UnknownRoute(String),

    /// Reverse lookup without a value for a capture.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    /// Reverse lookup with a value that is not a single path segment.
    #[error("parameter '{param}' of route '{route}' must be a single non-empty segment, got '{value}'")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },
}
