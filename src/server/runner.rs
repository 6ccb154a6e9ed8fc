//! The server loop state machine.
//!
//! `Starting` prints the banner and draws the interval, then moves to
//! `Looping`, which prints the request line and waits, forever or until the
//! shutdown receiver fires.

use rand::Rng;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::observability::metrics;
use crate::server::interval::Interval;
use crate::server::types::{LoopState, LoopSummary, ServerError};

/// Simulated API server: a banner followed by one line per interval.
#[derive(Debug)]
pub struct ServerLoop {
    config: ServerConfig,
    state: LoopState,
    requests: u64,
}

impl ServerLoop {
    /// Create a loop in the `Starting` state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: LoopState::Starting,
            requests: 0,
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The drawn interval, once started.
    pub fn interval(&self) -> Option<Interval> {
        match self.state {
            LoopState::Starting => None,
            LoopState::Looping { interval } => Some(interval),
        }
    }

    /// Request lines written so far.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Leave `Starting`: print the banner, then draw the interval from `rng`.
    ///
    /// Calling this again once looping prints nothing and returns the
    /// interval already drawn.
    pub async fn start<W, R>(&mut self, out: &mut W, rng: &mut R) -> Result<Interval, ServerError>
    where
        W: AsyncWrite + Unpin,
        R: Rng,
    {
        if let LoopState::Looping { interval } = self.state {
            return Ok(interval);
        }

        write_line(out, &self.config.banner).await?;

        let interval = self.config.interval.draw(rng);
        self.state = LoopState::Looping { interval };
        metrics::record_interval(interval);

        tracing::info!(
            interval_secs = interval.secs(),
            min_secs = self.config.interval.min_secs,
            max_secs = self.config.interval.max_secs,
            "Request interval chosen"
        );
        Ok(interval)
    }

    /// Run the `Looping` state until `shutdown` fires.
    ///
    /// Each iteration writes the request line and then sleeps for the fixed
    /// interval. The sleep is the only point where shutdown is observed.
    pub async fn run<W>(
        &mut self,
        out: &mut W,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<LoopSummary, ServerError>
    where
        W: AsyncWrite + Unpin,
    {
        let interval = self.interval().ok_or(ServerError::NotStarted)?;
        let pause = interval.as_duration();

        loop {
            write_line(out, &self.config.message).await?;
            self.requests += 1;
            metrics::record_request_handled();
            tracing::debug!(request = self.requests, "Request line emitted");

            tokio::select! {
                _ = tokio::time::sleep(pause) => {}
                _ = shutdown.recv() => {
                    tracing::info!(requests = self.requests, "Server loop received shutdown signal, exiting loop");
                    return Ok(LoopSummary {
                        requests: self.requests,
                        interval,
                    });
                }
            }
        }
    }
}

async fn write_line<W>(out: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
