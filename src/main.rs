use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use introscore::application::handlers::score_handler::{health_check, score_intro, service_banner};
use introscore::application::services::scoring_service::ScoringService;
use introscore::config::ServerConfig;
use introscore::domain::entities::rubric::RubricConfig;
use introscore::infrastructure::language_tool_client::{LanguageToolClient, LanguageToolConfig};

/// Maximum accepted request body size (1 MiB)
const MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "introscore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    info!("Intro scoring server starting...");

    // The rubric is a hard startup requirement: refuse to serve without it
    let rubric = match RubricConfig::from_path(&config.rubric_path) {
        Ok(rubric) => Arc::new(rubric),
        Err(e) => {
            error!("Cannot load rubric from '{}': {}", config.rubric_path, e);
            return Err(e.into());
        }
    };
    info!(
        content_checks = rubric.content_checks.len(),
        filler_words = rubric.filler_words.len(),
        "Rubric loaded from {}",
        config.rubric_path
    );

    let grammar_checker = Arc::new(LanguageToolClient::new(LanguageToolConfig::new(
        &config.language_tool_url,
        &config.language_tool_language,
    )));
    info!("Grammar service endpoint: {}", config.language_tool_url);

    let service = Arc::new(ScoringService::new(rubric, grammar_checker));

    let app = Router::new()
        .route("/", get(service_banner))
        .route("/health", get(health_check))
        .route("/score", post(score_intro))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(service);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server = axum::serve(listener, app);

    let shutdown_signal = async move {
        let ctrl_c = async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C signal"),
                Err(e) => error!("Failed to install Ctrl+C handler: {}", e),
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                    info!("Received SIGTERM signal");
                }
                Err(e) => error!("Failed to install SIGTERM handler: {}", e),
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    };

    info!("Server started successfully. Press Ctrl+C to stop.");
    server.with_graceful_shutdown(shutdown_signal).await?;

    info!("Server shutting down gracefully...");
    Ok(())
}
