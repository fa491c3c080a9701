//! Order Engine Binary
//!
//! Starts the order lifecycle HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-engine
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `DATABASE_URL`: SQLite URL (default: sqlite://orders.db)
//! - `DB_MAX_CONNECTIONS`: Pool size (default: 5)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use order_engine::config::EngineConfig;
use order_engine::engine::{OrderEngine, OrderQueryService};
use order_engine::server::{create_router, AppState};
use order_engine::store::Database;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting order engine");

    let config = EngineConfig::from_env();
    log_config(&config);

    let db = Database::connect(&config.database.url, config.database.max_connections).await?;
    db.init_schema().await?;

    let state = AppState {
        engine: Arc::new(OrderEngine::new(db.clone())),
        queries: Arc::new(OrderQueryService::new(db)),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  POST   /api/orders");
    tracing::info!("  GET    /api/orders");
    tracing::info!("  GET    /api/orders/{{id}}");
    tracing::info!("  PUT    /api/orders/{{id}}/status");
    tracing::info!("  DELETE /api/orders/{{id}}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Order engine stopped");
    Ok(())
}

/// Load .env file from the current directory, if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "order_engine=info"
                    .parse()
                    .expect("static directive 'order_engine=info' is valid"),
            ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(config: &EngineConfig) {
    tracing::info!(
        http_port = config.server.http_port,
        bind_address = %config.server.bind_address,
        database_url = %config.database.url,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals should fail fast at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
