//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (feature flags name defined routes)
//! - Validate value ranges (timeout > 0, base path shape, log filter)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::RouterConfig;
use crate::routing::catalog;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("history.base must start with '/', got '{0}'")]
    InvalidBase(String),

    #[error("loading.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("feature flag names unknown route '{0}'")]
    UnknownRoute(String),

    #[error("route '{0}' has more than one feature flag")]
    DuplicateFeature(String),

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = &config.history.base;
    if !base.starts_with('/') || base.contains(['?', '#']) {
        errors.push(ValidationError::InvalidBase(base.clone()));
    }

    if config.loading.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut seen = HashSet::new();
    for flag in &config.features {
        if !catalog::ROUTE_NAMES.contains(&flag.route.as_str()) {
            errors.push(ValidationError::UnknownRoute(flag.route.clone()));
        } else if !seen.insert(flag.route.as_str()) {
            errors.push(ValidationError::DuplicateFeature(flag.route.clone()));
        }
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::FeatureFlag;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = RouterConfig::default();
        config.history.base = "app".into();
        config.loading.timeout_ms = 0;
        config.features = vec![
            FeatureFlag {
                route: "admin".into(),
                enabled: true,
            },
            FeatureFlag {
                route: "about".into(),
                enabled: true,
            },
            FeatureFlag {
                route: "about".into(),
                enabled: false,
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBase("app".into()),
                ValidationError::ZeroTimeout,
                ValidationError::UnknownRoute("admin".into()),
                ValidationError::DuplicateFeature("about".into()),
            ]
        );
    }
}
