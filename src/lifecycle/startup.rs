//! Startup orchestration.
//!
//! # Responsibilities
//! - Seed the process random source (clock or fixed seed)
//! - Drive the server loop from `Starting` into `Looping`
//! - Hand the loop to the shutdown receiver
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The config is validated before it reaches this module

use tokio::io::AsyncWrite;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::server::interval::seeded_rng;
use crate::server::{LoopSummary, ServerError, ServerLoop};

/// Run the whole program against `out` until `shutdown` fires.
pub async fn serve<W>(
    config: ServerConfig,
    out: &mut W,
    shutdown: broadcast::Receiver<()>,
) -> Result<LoopSummary, ServerError>
where
    W: AsyncWrite + Unpin,
{
    let fixed_seed = config.seed;
    let mut server = ServerLoop::new(config);

    let (mut rng, seed) = seeded_rng(fixed_seed);
    let seed_source = if fixed_seed.is_some() { "fixed" } else { "clock" };
    tracing::info!(seed, seed_source, "Random source seeded");

    server.start(out, &mut rng).await?;
    server.run(out, shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use crate::server::IntervalPolicy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_seed_picks_same_interval_as_policy_draw() {
        let config = ServerConfig {
            seed: Some(1234),
            ..ServerConfig::default()
        };
        let expected = IntervalPolicy::default().draw(&mut StdRng::seed_from_u64(1234));

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        shutdown.trigger();

        let mut out = Vec::new();
        let summary = serve(config, &mut out, rx).await.unwrap();
        assert_eq!(summary.interval, expected);
        assert_eq!(summary.requests, 1);
    }
}
