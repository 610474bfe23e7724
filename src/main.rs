use std::net::SocketAddr;
use std::sync::Arc;

use sensei_engine::{
    app,
    config::{connect_scoped, ensure_schema, AppConfig},
    domain::{ai::init_ai_client, health::init_start_time, term::MySqlConnector},
    shutdown::shutdown_signal,
    utils::logging::init_logging,
    AppState,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // 1. Load environment
    dotenvy::dotenv().ok();

    // 2. Logging
    let _log_guard = init_logging();
    init_start_time();

    // 3. Configuration
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // 4. AI client, kept as a typed result for the process lifetime
    let ai = init_ai_client(&config);
    match &ai {
        Ok(_) => tracing::info!(model = %config.openai_model, "AI client configured"),
        Err(e) => tracing::error!(error = %e, "AI client configuration failed"),
    }

    // 5. Schema sync; failure is logged and the server still starts
    let database_url = config.database.connection_url();
    match &database_url {
        Ok(url) => match connect_scoped(url).await {
            Ok(db) => {
                if let Err(e) = ensure_schema(&db).await {
                    tracing::error!(error = %e, "Table creation failed");
                }
                if let Err(e) = db.close().await {
                    tracing::warn!(error = %e, "Failed to close startup connection");
                }
            }
            Err(e) => tracing::error!(error = %e, "Database connection failed at startup"),
        },
        Err(e) => tracing::error!(error = %e, "Database is not configured"),
    }

    let state = AppState {
        ai,
        store: Arc::new(MySqlConnector::new(database_url)),
    };

    // 6. Serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
