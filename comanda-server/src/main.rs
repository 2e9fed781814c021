use comanda_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, configuration, logging)
    let config = setup_environment()?;

    tracing::info!("Comanda server starting...");

    // 2. State (database, schema, seed, JWT)
    let state = ServerState::initialize(&config).await?;

    // 3. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
