//! Shared utilities for integration tests.

use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::io::AsyncWrite;
use tokio::time::Instant;

#[derive(Default)]
struct RecorderState {
    partial: Vec<u8>,
    lines: Vec<(Instant, String)>,
}

/// An `AsyncWrite` that timestamps every complete line it receives.
///
/// Timestamps come from `tokio::time::Instant`, so they follow paused time.
#[derive(Clone, Default)]
pub struct LineRecorder {
    state: Arc<Mutex<RecorderState>>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.lines.iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn timestamps(&self) -> Vec<Instant> {
        let state = self.state.lock().unwrap();
        state.lines.iter().map(|(at, _)| *at).collect()
    }
}

impl AsyncWrite for LineRecorder {
    fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        for &byte in buf {
            if byte == b'\n' {
                let line = String::from_utf8_lossy(&state.partial).into_owned();
                state.partial.clear();
                state.lines.push((Instant::now(), line));
            } else {
                state.partial.push(byte);
            }
        }
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// An `AsyncWrite` whose reader has gone away.
pub struct ClosedPipe;

impl AsyncWrite for ClosedPipe {
    fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, _buf: &[u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
