//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Seed RNG → Banner → Draw interval → Loop
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Loop's sleep ends → Summary returned → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Without a signal the loop never ends
//! - Shutdown is only observed between iterations, during the wait

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
