use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backlot_api::config::{MediaConfig, ServerConfig};
use backlot_api::router::build_app_router;
use backlot_api::state::AppState;
use backlot_media::{LocalMediaStore, MediaStore, S3MediaStore};
use backlot_upstream::UpstreamApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backlot_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Media storage ---
    let media: Arc<dyn MediaStore> = match &config.media {
        MediaConfig::Local {
            root,
            public_base_url,
        } => {
            tracing::info!(root = %root.display(), "Using local media storage");
            Arc::new(LocalMediaStore::new(root.clone(), public_base_url.clone()))
        }
        MediaConfig::S3 {
            bucket,
            prefix,
            public_base_url,
        } => {
            tracing::info!(bucket = %bucket, "Using S3 media storage");
            Arc::new(
                S3MediaStore::from_env(bucket.clone(), prefix.clone(), public_base_url.clone())
                    .await,
            )
        }
    };

    // --- Marketplace backend client ---
    let upstream = match &config.upstream_api_url {
        Some(url) => {
            tracing::info!(url = %url, "Marketplace backend configured");
            Some(Arc::new(UpstreamApi::new(url.clone())))
        }
        None => {
            tracing::warn!(
                "UPSTREAM_API_URL not set; serving seed catalogs, listing creation disabled"
            );
            None
        }
    };

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        upstream,
        media,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
