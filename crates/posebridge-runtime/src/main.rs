//! posebridge relay binary
//!
//! Establishes the outbound UDP channel, then drives the snapshot pipeline
//! from the synthetic feed at the configured rate. A send failure is fatal:
//! the pipeline performs no retries, so the process exits with the error.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use posebridge_core::BridgeResult;
use posebridge_pipeline::SnapshotHandler;
use posebridge_runtime::{RuntimeConfig, SyntheticFeed};
use posebridge_transport::UdpPoseSender;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        dest = %config.dest_addr,
        entities = config.entities,
        feed_hz = config.feed_hz,
        "starting pose relay"
    );

    if let Err(e) = run(config).await {
        tracing::error!("relay stopped: {e}");
        std::process::exit(1);
    }
}

fn load_config() -> BridgeResult<RuntimeConfig> {
    match std::env::args().nth(1) {
        Some(path) => RuntimeConfig::load(path),
        None => Ok(RuntimeConfig::default()),
    }
}

async fn run(config: RuntimeConfig) -> BridgeResult<()> {
    let sender = UdpPoseSender::establish(config.dest_addr)?;
    let mut handler = SnapshotHandler::with_config(sender, config.pipeline());
    let mut feed = SyntheticFeed::new(config.entities, &config.mount_frame);

    let period = Duration::from_secs_f64(1.0 / config.feed_hz.max(1) as f64);
    let mut interval = tokio::time::interval(period);

    loop {
        interval.tick().await;
        feed.advance();
        let entries = feed.entries();
        handler.on_snapshot(&entries)?;
    }
}
