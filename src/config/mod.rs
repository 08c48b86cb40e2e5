//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → Router::from_config (feature flags, history, matching, loading)
//!     → observability::logging (log level and format)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the route table never changes after
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    FeatureFlag, HistoryConfig, HistoryMode, LoadingConfig, LogFormat, MatchingConfig,
    ObservabilityConfig, RouterConfig,
};
pub use validation::{validate_config, ValidationError};
