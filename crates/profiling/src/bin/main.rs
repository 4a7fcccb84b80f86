use anyhow::Context;
use msgbus_profiling::{MsgEnvelope, ProfilingStamper};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_KEY: &str = "ts_key";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let key = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_KEY.to_string());
    let stamper = ProfilingStamper::from_env();

    tracing::info!(
        enabled = stamper.is_profiling_enabled(),
        key = %key,
        "Stamping profiling envelope"
    );

    let mut meta = MsgEnvelope::new();
    stamper.stamp_if_enabled(&mut meta, &key);

    let json = meta.to_json().context("Failed to serialize envelope")?;
    println!("{json}");

    Ok(())
}
