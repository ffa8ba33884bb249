use anyhow::Context;

use signal_core::config::SignalConfig;
use signal_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let root = std::env::current_dir().context("resolving working directory")?;
    let config = SignalConfig::load(&root).context("loading configuration")?;

    signal_api::server::serve(&config)
        .await
        .context("running HTTP server")?;
    Ok(())
}
