//! Configuration schema definitions.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock behavior: the classic banner, the classic request line and an
//! interval drawn from 1 to 3 seconds.

use serde::Deserialize;

use crate::server::interval::IntervalPolicy;

/// Banner printed once before the loop starts.
pub const DEFAULT_BANNER: &str = "Starting API Server...";

/// Line printed on every loop iteration.
pub const DEFAULT_MESSAGE: &str = "Handling API request";

/// Root configuration for the server loop.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Startup banner line.
    pub banner: String,

    /// Line emitted per simulated request.
    pub message: String,

    /// Range the fixed interval is drawn from.
    pub interval: IntervalPolicy,

    /// Fixed seed for the random source. `None` seeds from the wall clock.
    pub seed: Option<u64>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            interval: IntervalPolicy::default(),
            seed: None,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
