//! Questline story bot server entry point.

use std::error::Error;
use std::sync::Arc;

use questline_api::config::AppConfig;
use questline_api::error::AppError;
use questline_api::state::AppState;
use questline_core::clock::{Clock, SystemClock};
use questline_session::InMemorySessionStore;
use questline_story::StoryGraph;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Questline story bot");

    let config = AppConfig::from_env()?;

    // Load and validate the story before accepting any traffic.
    let story = match &config.story_path {
        Some(path) => StoryGraph::from_path(path),
        None => StoryGraph::bundled(),
    }
    .map_err(AppError::from)?;
    tracing::info!(
        start = story.start_scene_id(),
        scenes = story.len(),
        version_hash = story.version_hash(),
        "story loaded"
    );

    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let app_state = AppState::new(
        Arc::new(story),
        Arc::new(InMemorySessionStore::new()),
        clock,
    );
    let app = questline_api::app(app_state);

    let addr = config.listen_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::from)?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
