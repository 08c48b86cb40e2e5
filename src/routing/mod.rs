//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target path ("/match/42")
//!     → table.rs (ordered scan of active routes)
//!     → matcher.rs (segment-by-segment comparison, bind captures)
//!     → Return: RouteMatch { route, params } or no match
//!
//! Route Compilation (at startup):
//!     RouteDefinition[] (catalog.rs)
//!     → Parse patterns
//!     → Split out disabled routes, reject duplicates
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod route;
pub mod table;

pub use error::RouteError;
pub use matcher::{Params, PathPattern, Segment};
pub use route::RouteDefinition;
pub use table::{RouteMatch, RouteTable};
