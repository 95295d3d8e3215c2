use grill_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logging
    let config = setup_environment()?;
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        backend = ?config.store_backend,
        "Holy Grills starting..."
    );

    // 2. Document store
    let state = ServerState::initialize(&config)?;

    // 3. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
