//! Tracing subscriber setup for the binary

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter` when it is set. Output goes to stderr
/// so it never mixes with the board on stdout.
pub fn setup(default_filter: &str) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter \"{default_filter}\""))?,
    };
    let stderr_formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(())
}
