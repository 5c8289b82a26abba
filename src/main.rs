use std::sync::Arc;

use anyhow::Context;
use medeventgen::config::AppConfig;
use medeventgen::core::llm::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = medeventgen::core::logging::init();
    log::info!("MedEventGen v{} starting", medeventgen::VERSION);

    let config = AppConfig::load().context("loading configuration")?;

    let client = GeminiClient::new(&config.gemini).context("building Gemini client")?;
    log::info!("Using Gemini model {}", client.model());

    medeventgen::server::serve(&config.server, Arc::new(client))
        .await
        .context("running HTTP server")?;

    Ok(())
}
