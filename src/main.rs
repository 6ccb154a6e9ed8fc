//! api-heartbeat
//!
//! A stand-in API server for exercising process supervisors.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                      API HEARTBEAT                       │
//!   │                                                          │
//!   │  ┌─────────┐    ┌──────────┐    ┌──────────────┐         │
//!   │  │ config  │───▶│ startup  │───▶│ server loop  │──▶ stdout
//!   │  │ (TOML)  │    │ seed RNG │    │ banner, then │         │
//!   │  └─────────┘    └──────────┘    │ line + sleep │         │
//!   │                                 └──────▲───────┘         │
//!   │  ┌─────────┐    ┌──────────┐           │                 │
//!   │  │ signals │───▶│ shutdown │───────────┘                 │
//!   │  └─────────┘    └──────────┘                             │
//!   │                                                          │
//!   │  observability: tracing → stderr, metrics facade         │
//!   └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use api_heartbeat::config::{load_or_default, ObservabilityConfig};
use api_heartbeat::lifecycle::signals::{self, SignalListener};
use api_heartbeat::lifecycle::{startup, Shutdown};
use api_heartbeat::observability::logging;

#[derive(Parser)]
#[command(name = "api-heartbeat")]
#[command(about = "Prints a banner, then a request line at a fixed random interval", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed random seed (overrides the config file; default seeds from the clock)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load_or_default(cli.config.as_deref());
    let level = match &loaded {
        Ok(config) => config.observability.log_level.clone(),
        Err(_) => ObservabilityConfig::default().log_level,
    };
    logging::init_logging(&level);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tracing::info!(
        config_path = ?cli.config,
        min_secs = config.interval.min_secs,
        max_secs = config.interval.max_secs,
        "api-heartbeat v0.1.0 starting"
    );

    let listener = match SignalListener::install() {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to install signal handlers");
            return ExitCode::FAILURE;
        }
    };
    let shutdown = Arc::new(Shutdown::new());
    let rx = shutdown.subscribe();
    let signal = signals::spawn_signal_listener(listener, shutdown.clone());

    let mut stdout = tokio::io::stdout();
    let summary = match startup::serve(config, &mut stdout, rx).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "Server loop failed");
            return ExitCode::FAILURE;
        }
    };

    // The loop only returns Ok once the listener has triggered the shutdown.
    let signal = match signal.await {
        Ok(signal) => signal,
        Err(e) => {
            tracing::error!(error = %e, "Signal listener task failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        requests = summary.requests,
        interval_secs = summary.interval.secs(),
        ?signal,
        "Shutdown complete"
    );
    ExitCode::from(signal.exit_code())
}
