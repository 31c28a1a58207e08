mod config;
mod contact;
mod content;
mod demos;
mod errors;
mod navigation;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::assets::FsAssetSource;
use crate::content::ContentStore;
use crate::navigation::SessionRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio Web v{}", env!("CARGO_PKG_VERSION"));

    // Load static assets once; missing files degrade to fallbacks
    let content = ContentStore::load(
        &FsAssetSource,
        &config.profile_image_path,
        &config.resume_pdf_path,
    )
    .await;
    info!(
        "Content store ready (profile image: {})",
        if content.profile_image().is_available() {
            "available"
        } else {
            "text fallback"
        }
    );

    let state = AppState {
        content: Arc::new(content),
        sessions: SessionRegistry::new(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
