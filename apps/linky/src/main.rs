mod config;
mod errors;
mod layout;
mod models;
mod profile;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ProfileSourceConfig};
use crate::profile::{HttpProfileSource, JsonFileProfileSource, ProfileSource, StaticProfileSource};
use crate::render::{ImageSource, PageSettings};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unusable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Linky v{}", env!("CARGO_PKG_VERSION"));

    // Initialize profile lookup
    let profiles = build_profile_source(&config.profile_source).await?;
    info!("Profile source initialized ({})", profiles.kind());

    let page_settings = PageSettings {
        app_name: config.app_name.clone(),
        images: ImageSource::new(config.image_base_url.clone()),
    };
    info!(
        "Rendering '{}' pages with images from {}",
        page_settings.app_name, config.image_base_url
    );

    // Build app state
    let state = AppState {
        profiles,
        page_settings,
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the configured profile source. File sources are read once, here.
async fn build_profile_source(config: &ProfileSourceConfig) -> Result<Arc<dyn ProfileSource>> {
    let source: Arc<dyn ProfileSource> = match config {
        ProfileSourceConfig::Static => Arc::new(StaticProfileSource),
        ProfileSourceConfig::File { path } => Arc::new(JsonFileProfileSource::load(path).await?),
        ProfileSourceConfig::Http { url, timeout_secs } => Arc::new(HttpProfileSource::new(
            url,
            Duration::from_secs(*timeout_secs),
        )?),
    };
    Ok(source)
}
