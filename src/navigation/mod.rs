//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! push / replace / enter (target)      back / forward / go (delta)
//!     → location.rs (parse path, query, hash)   → history.rs (peek entry)
//!     → router.rs (generation++, state = Pending)
//!     → routing::RouteTable (match) → views::ViewSource (load, may suspend)
//!     → still the newest navigation?
//!         no  → Cancelled (nothing written)
//!         yes → history.rs (push / replace / move cursor)
//!             → current route swapped, state = Settled
//! ```
//!
//! # Design Decisions
//! - Failed navigations leave the previous route and history untouched
//! - Newer navigations supersede pending ones
//! - State and current route are lock-free reads (`arc-swap`)

pub mod error;
pub mod history;
pub mod location;
pub mod router;
pub mod state;

pub use error::{NavigationError, ResolveError};
pub use history::{History, MemoryHistory, WebHistory};
pub use location::Location;
pub use router::Router;
pub use state::{ActiveRoute, NavigationState, ResolvedRoute, RouteSummary, Settled};
