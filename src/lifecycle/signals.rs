//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT, and SIGTERM on Unix, before the banner is written
//! - Translate the first one into a `Shutdown` trigger
//! - Report which signal fired so the process can exit with its status
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Exit status follows the shell convention of 128 + signal number

use std::io;
use std::sync::Arc;

use crate::lifecycle::Shutdown;

/// A signal that ends the server loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    /// SIGINT (Ctrl+C).
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl TerminationSignal {
    /// POSIX signal number.
    pub fn number(self) -> u8 {
        match self {
            TerminationSignal::Interrupt => 2,
            TerminationSignal::Terminate => 15,
        }
    }

    /// Conventional exit status for a process ended by this signal.
    pub fn exit_code(self) -> u8 {
        128 + self.number()
    }
}

/// Signal handlers, installed up front so no signal is missed after startup.
#[derive(Debug)]
pub struct SignalListener {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl SignalListener {
    /// Register the handlers. Must be called inside a tokio runtime.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }

    /// Resolve once a termination signal arrives.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> TerminationSignal {
        let signal = tokio::select! {
            _ = self.interrupt.recv() => TerminationSignal::Interrupt,
            _ = self.terminate.recv() => TerminationSignal::Terminate,
        };
        tracing::info!(?signal, "Shutdown signal received");
        signal
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> TerminationSignal {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to wait for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!(signal = ?TerminationSignal::Interrupt, "Shutdown signal received");
        TerminationSignal::Interrupt
    }
}

/// Spawn a task that triggers `shutdown` on the first termination signal and
/// yields that signal.
pub fn spawn_signal_listener(
    mut listener: SignalListener,
    shutdown: Arc<Shutdown>,
) -> tokio::task::JoinHandle<TerminationSignal> {
    tokio::spawn(async move {
        let signal = listener.recv().await;
        shutdown.trigger();
        signal
    })
}
