use match_recorder::{create_router, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Match Recorder service");

    let config = Config::from_env()?;

    // The store lives for as long as the process does
    let state = AppState::new();

    let app = create_router(state);

    // Bind and serve
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on port {}", addr.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Match Recorder stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
