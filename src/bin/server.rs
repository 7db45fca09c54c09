//! Standalone booking API server (without the Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: PORT=3003 cargo run --bin server --features server

use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crm_hub::config::ServerConfig;
use crm_hub::handlers::api_router;
use crm_hub::infrastructure::repositories::PersonRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::parse();

    tracing::info!("Starting CRM Hub API Server (standalone)...");

    let app = api_router(PersonRepository::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
