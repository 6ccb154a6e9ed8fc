//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! server loop and lifecycle produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counter and gauge via the metrics facade)
//! ```

pub mod logging;
pub mod metrics;
