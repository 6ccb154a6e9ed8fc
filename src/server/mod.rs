//! Server loop subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig + seeded RNG
//!     → runner.rs  Starting: banner → interval.rs draw → Looping
//!     → runner.rs  Looping:  request line → sleep(interval) → repeat
//!     → Shutdown broadcast ends the sleep early
//! ```
//!
//! # Design Decisions
//! - The interval is drawn once and never redrawn
//! - The random source is passed in; there is no global generator
//! - Output goes to any `AsyncWrite`, stdout in the binary

pub mod interval;
pub mod runner;
pub mod types;

pub use interval::{Interval, IntervalPolicy};
pub use runner::ServerLoop;
pub use types::{LoopState, LoopSummary, ServerError};
