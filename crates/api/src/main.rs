use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use cib_assistant::{AssistantConfig, GeminiClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cib_api::config::ServerConfig;
use cib_api::router::build_app_router;
use cib_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cib_api=debug,cib_db=debug,cib_assistant=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    let pool = cib_db::create_pool(&database_url).await?;
    tracing::info!("Database connection pool created");

    cib_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    cib_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- Chat relay ---
    let assistant_config = AssistantConfig::from_env();
    let chat = if assistant_config.api_key.is_some() {
        let client = GeminiClient::new(&assistant_config)?;
        tracing::info!(model = client.model(), "Chat assistant enabled");
        Some(Arc::new(client))
    } else {
        tracing::warn!("GEMINI_API_KEY not set, chat assistant disabled");
        None
    };

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        chat,
    };

    let app = build_app_router(state)?;

    // --- Start server ---
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                stop_rx.await.ok();
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // The server only returns on its own when it fails.
            result??;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    stop_tx.send(()).ok();
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    match tokio::time::timeout(drain, server).await {
        Ok(result) => result??,
        Err(_) => tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "In-flight requests did not drain before the shutdown timeout"
        ),
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// If a handler cannot be installed that branch never resolves, so the
/// other signal still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
