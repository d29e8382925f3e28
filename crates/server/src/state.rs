use std::sync::Arc;

use domain::{GenreTable, MediaRepository};
use metadata::{MediaProvider, Normalizer, TmdbProvider};
use reqwest::Client;
use sqlx::SqlitePool;
use tmdb::TmdbClient;

use crate::error::ServerError;
use crate::repositories::SqliteMediaRepository;
use crate::services::{
    MediaSyncJob, SchedulerService, SettingsService, SyncObserver, SyncService, TracingObserver,
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsService>,
    pub sync: Arc<SyncService>,
}

impl AppState {
    /// Build the state with the TMDB provider configured from settings.
    pub fn new(db: SqlitePool, settings: SettingsService) -> Result<Self, ServerError> {
        let tmdb_settings = &settings.get().tmdb;
        let http_client = Client::builder().timeout(tmdb_settings.timeout()).build()?;

        let mut tmdb = TmdbClient::new(http_client, tmdb_settings.api_key.as_str())
            .with_language(&tmdb_settings.language);
        if let Some(base_url) = &tmdb_settings.base_url {
            tmdb = tmdb.with_base_url(base_url);
        }

        if tmdb_settings.api_key.is_empty() {
            tracing::warn!("No TMDB API key configured, provider calls will fail");
        }

        let provider = Arc::new(TmdbProvider::new(Arc::new(tmdb)));
        Ok(Self::with_provider(db, settings, provider))
    }

    /// Build the state around an existing provider.
    pub fn with_provider(
        db: SqlitePool,
        settings: SettingsService,
        provider: Arc<dyn MediaProvider>,
    ) -> Self {
        let media: Arc<dyn MediaRepository> = Arc::new(SqliteMediaRepository::new(db));
        let observer: Arc<dyn SyncObserver> = Arc::new(TracingObserver);
        let normalizer = Normalizer::new(Arc::new(GenreTable::default()));

        tracing::debug!("Using metadata provider '{}'", provider.name());

        let sync = Arc::new(SyncService::new(
            provider,
            media,
            normalizer,
            observer,
            settings.get().tmdb.detail_language.clone(),
        ));

        Self {
            settings: Arc::new(settings),
            sync,
        }
    }

    /// Scheduler carrying the periodic sync job, if enabled in settings.
    pub fn scheduler(&self) -> SchedulerService {
        let sync_settings = &self.settings.get().sync;
        let scheduler = SchedulerService::new();

        if !sync_settings.enabled {
            tracing::info!("Scheduled sync disabled");
            return scheduler;
        }

        scheduler.with_job(MediaSyncJob::new(
            Arc::clone(&self.sync),
            sync_settings.interval(),
        ))
    }
}
