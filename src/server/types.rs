//! Loop state and error definitions.

use thiserror::Error;

use crate::server::interval::Interval;

/// Where the server loop is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Banner not yet printed, interval not yet drawn.
    Starting,

    /// Emitting request lines every `interval`.
    Looping { interval: Interval },
}

/// What a loop had done by the time it was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Request lines written.
    pub requests: u64,

    /// The interval used for every iteration.
    pub interval: Interval,
}

/// Errors that end the server loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Writing a line to the output stream failed (e.g. closed pipe).
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// `run` was called before `start`.
    #[error("server loop has not been started")]
    NotStarted,
}
