//! View subsystem.
//!
//! # Data Flow
//! ```text
//! RouteDefinition.component (ViewSource)
//!     → Eager(view)  → ready immediately
//!     → Lazy(loader) → loader future awaited on first navigation
//!                    → loaded view cached for later navigations
//!     → ViewRef handed to the rendering layer with its props
//! ```
//!
//! # Design Decisions
//! - Eager and lazy sources are one tagged union, not two code paths
//! - A lazy view loads at most once; failed loads are not cached
//! - Views here are stand-ins: rendering is text only

pub mod pages;
pub mod source;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use pages::{AboutView, HistoryView, HomeView, MatchDetailView, UserView};
pub use source::{LazyView, LoadError, ViewSource};

/// Input properties delivered to a view.
pub type Props = BTreeMap<String, String>;

/// Shared handle to a loaded view.
pub type ViewRef = Arc<dyn View>;

/// A renderable view.
pub trait View: Send + Sync + fmt::Debug {
    /// Component name, used in logs and render output.
    fn name(&self) -> &'static str;

    /// Render the view with the given input properties.
    fn render(&self, props: &Props) -> String;
}
