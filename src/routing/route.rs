//! Route definitions.

use crate::routing::error::RouteError;
use crate::routing::matcher::{Params, PathPattern};
use crate::views::{Props, ViewSource};

/// A single registered route.
#[derive(Debug)]
pub struct RouteDefinition {
    name: String,
    pattern: PathPattern,
    component: ViewSource,
    props: bool,
    enabled: bool,
}

impl RouteDefinition {
    /// Create an enabled route without props mode.
    pub fn new(
        name: impl Into<String>,
        path: &str,
        component: ViewSource,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            name: name.into(),
            pattern: PathPattern::parse(path)?,
            component,
            props: false,
            enabled: true,
        })
    }

    /// Deliver captured params to the view as input properties.
    pub fn with_props(mut self, props: bool) -> Self {
        self.props = props;
        self
    }

    /// Mark the route active or inactive.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn component(&self) -> &ViewSource {
        &self.component
    }

    pub fn passes_props(&self) -> bool {
        self.props
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Props for the view, present only in props mode.
    pub fn props_for(&self, params: &Params) -> Option<Props> {
        self.props.then(|| params.clone())
    }
}
