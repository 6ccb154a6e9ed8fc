//! Simulated API server.
//!
//! Prints a startup banner, draws one pause of 1 to 3 seconds from a
//! clock-seeded random source, then prints a request line after every pause
//! until the process is stopped.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod server;

pub use config::ServerConfig;
pub use lifecycle::Shutdown;
pub use server::{Interval, IntervalPolicy, LoopState, LoopSummary, ServerError, ServerLoop};
