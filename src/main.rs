use tienda_api::{
    config::load_config, infrastructure::logger::Logger, router, AppState, DatabaseManager,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    Logger::init(&config.logging)?;

    match &source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let db = DatabaseManager::connect(&config.database).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e
    })?;
    db.ensure_schema().await?;

    let state = AppState::new(db.clone(), &config.api);
    let app = router(state, &config.http);

    let listener = TcpListener::bind(config.http.socket_addr()?).await?;
    let addr = listener.local_addr()?;

    info!("🚀 tienda-api running on http://{}", addr);
    info!("   POST   /producto/        - Create product");
    info!("   GET    /producto/:id     - Get product");
    info!("   GET    /productos/       - List products");
    info!("   PUT    /productos/:id    - Update product");
    info!("   DELETE /productos/:id    - Delete product");
    info!("   POST   /usuario/         - Create user");
    info!("   GET    /usuario/:id      - Get user");
    info!("   GET    /usuarios/        - List users");
    info!("   DELETE /usuario/:id      - Delete user");
    info!("   POST   /login/           - Check credentials");
    info!("   GET    /health           - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
