//! Popular-media sync server.
//!
//! Fetches popular movies and TV shows from TMDB into SQLite on a schedule
//! and serves random or latest subsets over HTTP.

pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod state;

use std::net::SocketAddr;

pub use api::create_router;
pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, ServerError};
pub use services::SettingsService;
pub use state::AppState;

use models::{Actor, BackfillReport, SyncReport};

/// Open the database and build the application state.
pub async fn init_state(config: Config, settings: SettingsService) -> Result<AppState, ServerError> {
    tokio::fs::create_dir_all(&config.data_path).await?;
    let pool = create_pool(&config.database_url(), config.max_connections).await?;
    tracing::info!("Database ready at {}", config.database_path().display());

    AppState::new(pool, settings)
}

/// Serve the HTTP API and run the scheduled sync until the process exits.
pub async fn run_server(
    addr: SocketAddr,
    config: Config,
    settings: SettingsService,
) -> Result<(), ServerError> {
    banner::print_banner();

    let state = init_state(config, settings).await?;
    state.scheduler().start();

    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run one full sync as the system actor.
pub async fn run_sync_once(config: Config, settings: SettingsService) -> Result<SyncReport, ServerError> {
    let state = init_state(config, settings).await?;
    Ok(state.sync.run_full_sync(Actor::System).await)
}

/// Run one genre backfill pass as the system actor.
pub async fn run_backfill_once(
    config: Config,
    settings: SettingsService,
) -> Result<BackfillReport, ServerError> {
    let state = init_state(config, settings).await?;
    Ok(state.sync.run_genre_backfill(Actor::System).await)
}
