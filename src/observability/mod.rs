//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, one span per navigation)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log output (stderr, pretty or JSON)
//!     → Whatever metrics recorder the embedding app installs
//! ```
//!
//! # Design Decisions
//! - Navigation ID flows through every event of a navigation
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;
