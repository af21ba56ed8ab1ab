use anyhow::Context;
use rentify_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("Invalid configuration")?;

    init_logger_with_file(config.log_level.as_deref(), config.log_dir.as_deref());
    tracing::info!("Starting RentifyTech server (env: {})", config.environment);

    let state = ServerState::initialize(&config)
        .await
        .context("Failed to initialize server state")?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
