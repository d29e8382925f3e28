use std::sync::Arc;

use chrono::Utc;
use domain::{join_genres, MediaRecord, MediaRepository, MediaType, SampleOrder};
use metadata::{MediaProvider, Normalizer};
use tokio::sync::Mutex;

use super::SyncObserver;
use crate::models::{Actor, BackfillEntry, BackfillReport, PhaseOutcome, PhaseReport, SyncReport};

/// Counters for one fetch-and-save phase
#[derive(Default)]
struct PhaseStats {
    saved: usize,
    skipped: usize,
    failed: usize,
}

/// Sync orchestrator: provider → normalizer → repository.
///
/// Nothing inside a run is fatal. A failed provider call fails its phase, a
/// bad item is skipped, and a store error counts against the item only.
pub struct SyncService {
    provider: Arc<dyn MediaProvider>,
    repository: Arc<dyn MediaRepository>,
    normalizer: Normalizer,
    observer: Arc<dyn SyncObserver>,
    detail_language: String,
    /// Held for the duration of a sync or backfill run
    run_lock: Mutex<()>,
}

impl SyncService {
    pub fn new(
        provider: Arc<dyn MediaProvider>,
        repository: Arc<dyn MediaRepository>,
        normalizer: Normalizer,
        observer: Arc<dyn SyncObserver>,
        detail_language: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            repository,
            normalizer,
            observer,
            detail_language: detail_language.into(),
            run_lock: Mutex::new(()),
        }
    }

    /// Fetch and store popular movies, then popular series.
    pub async fn run_full_sync(&self, actor: Actor) -> SyncReport {
        let _guard = self.run_lock.lock().await;

        let started_at = Utc::now();
        self.observer.sync_started(&actor, started_at);

        let mut phases = Vec::with_capacity(MediaType::ALL.len());
        for media_type in MediaType::ALL {
            let phase = self.sync_phase(media_type).await;
            self.observer.phase_finished(&actor, &phase);
            phases.push(phase);
        }

        let report = SyncReport {
            actor,
            started_at,
            finished_at: Utc::now(),
            phases,
        };
        self.observer.sync_finished(&report);
        report
    }

    async fn sync_phase(&self, media_type: MediaType) -> PhaseReport {
        let items = match self.provider.fetch_popular(media_type).await {
            Ok(items) => items,
            Err(e) => {
                return PhaseReport {
                    media_type,
                    outcome: PhaseOutcome::Failed {
                        reason: e.to_string(),
                    },
                };
            }
        };

        let mut stats = PhaseStats::default();
        for item in &items {
            let raw = match item {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::debug!(media_type = %media_type, "Skipping unreadable item: {}", e);
                    stats.skipped += 1;
                    continue;
                }
            };

            let request = match self.normalizer.normalize(raw) {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!(tmdb_id = raw.tmdb_id(), "Skipping item: {}", e);
                    stats.skipped += 1;
                    continue;
                }
            };

            match self.repository.upsert(&request).await {
                Ok(_) => stats.saved += 1,
                Err(e) => {
                    tracing::warn!(
                        tmdb_id = request.tmdb_id,
                        media_type = %media_type,
                        "Failed to save item: {}",
                        e
                    );
                    stats.failed += 1;
                }
            }
        }

        PhaseReport {
            media_type,
            outcome: PhaseOutcome::Completed {
                fetched: items.len(),
                saved: stats.saved,
                skipped: stats.skipped,
                failed: stats.failed,
            },
        }
    }

    /// Fill in genres for stored records that have none, one detail call each.
    pub async fn run_genre_backfill(&self, actor: Actor) -> BackfillReport {
        let _guard = self.run_lock.lock().await;

        let mut report = BackfillReport::default();
        let records = match self.repository.find_missing_genres().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Failed to list records missing genres: {}", e);
                self.observer.backfill_finished(&actor, &report);
                return report;
            }
        };

        if records.is_empty() {
            tracing::debug!("No records missing genres");
        }

        for record in records {
            match self.backfill_record(&record).await {
                Some(entry) => report.updated.push(entry),
                None => report.skipped += 1,
            }
        }

        self.observer.backfill_finished(&actor, &report);
        report
    }

    async fn backfill_record(&self, record: &MediaRecord) -> Option<BackfillEntry> {
        let raw = match self
            .provider
            .fetch_details(record.tmdb_id, record.media_type, Some(&self.detail_language))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    id = record.id,
                    tmdb_id = record.tmdb_id,
                    "Failed to fetch details for '{}': {}",
                    record.title,
                    e
                );
                return None;
            }
        };

        let names = self.normalizer.expanded_genres(&raw);
        if names.is_empty() {
            tracing::debug!(tmdb_id = record.tmdb_id, "Details carry no genres");
            return None;
        }

        let genres = join_genres(&names);
        match self.repository.update_genres(record.id, &genres).await {
            Ok(true) => Some(BackfillEntry {
                id: record.id,
                tmdb_id: record.tmdb_id,
                title: record.title.clone(),
                media_type: record.media_type,
                genres,
            }),
            Ok(false) => {
                tracing::warn!(id = record.id, "Record vanished before genre update");
                None
            }
            Err(e) => {
                tracing::warn!(id = record.id, "Failed to update genres: {}", e);
                None
            }
        }
    }

    /// Read up to `limit` stored records of one type. Never touches the provider.
    pub async fn sample(
        &self,
        actor: &Actor,
        media_type: MediaType,
        limit: u32,
        order: SampleOrder,
    ) -> domain::DomainResult<Vec<MediaRecord>> {
        let records = self.repository.sample(media_type, limit, order).await?;
        self.observer
            .sample_served(actor, media_type, order, records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use domain::{GenreTable, UpsertMediaRequest};
    use metadata::{ListedRecord, ProviderError, RawRecord, TmdbProvider};
    use parking_lot::Mutex as SyncMutex;
    use std::collections::HashMap;
    use tmdb::{Genre, Movie, TmdbClient, TvShow};

    use crate::db::test_pool;
    use crate::repositories::SqliteMediaRepository;

    /// Provider answering from canned data; missing entries fail as transport errors.
    #[derive(Default)]
    struct MockProvider {
        popular: HashMap<MediaType, Vec<RawRecord>>,
        details: HashMap<i64, RawRecord>,
        detail_languages: Arc<SyncMutex<Vec<Option<String>>>>,
    }

    #[async_trait]
    impl MediaProvider for MockProvider {
        async fn fetch_popular(
            &self,
            media_type: MediaType,
        ) -> Result<Vec<ListedRecord>, ProviderError> {
            let records = self
                .popular
                .get(&media_type)
                .ok_or_else(|| ProviderError::Transport("connection refused".to_string()))?;
            Ok(records.iter().cloned().map(Ok).collect())
        }

        async fn fetch_details(
            &self,
            tmdb_id: i64,
            _media_type: MediaType,
            language: Option<&str>,
        ) -> Result<RawRecord, ProviderError> {
            self.detail_languages.lock().push(language.map(str::to_string));
            self.details
                .get(&tmdb_id)
                .cloned()
                .ok_or_else(|| ProviderError::Timeout("operation timed out".to_string()))
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        phases: SyncMutex<Vec<PhaseReport>>,
        finished: SyncMutex<u32>,
        samples: SyncMutex<Vec<(String, usize)>>,
    }

    impl SyncObserver for RecordingObserver {
        fn sync_started(&self, _actor: &Actor, _at: DateTime<Utc>) {}

        fn phase_finished(&self, _actor: &Actor, phase: &PhaseReport) {
            self.phases.lock().push(phase.clone());
        }

        fn sync_finished(&self, _report: &SyncReport) {
            *self.finished.lock() += 1;
        }

        fn backfill_finished(&self, _actor: &Actor, _report: &BackfillReport) {
            *self.finished.lock() += 1;
        }

        fn sample_served(&self, actor: &Actor, _: MediaType, _: SampleOrder, count: usize) {
            self.samples.lock().push((actor.to_string(), count));
        }
    }

    fn movie(id: i64, title: &str, genre_ids: Vec<i64>) -> RawRecord {
        RawRecord::Movie(Movie {
            id,
            title: title.to_string(),
            genre_ids: Some(genre_ids),
            ..Default::default()
        })
    }

    fn show(id: i64, name: &str, genre_ids: Vec<i64>) -> RawRecord {
        RawRecord::Series(TvShow {
            id,
            name: name.to_string(),
            genre_ids: Some(genre_ids),
            ..Default::default()
        })
    }

    fn show_details(id: i64, name: &str, genres: &[(i64, &str)]) -> RawRecord {
        RawRecord::Series(TvShow {
            id,
            name: name.to_string(),
            genres: Some(
                genres
                    .iter()
                    .map(|(id, name)| Genre {
                        id: *id,
                        name: name.to_string(),
                    })
                    .collect(),
            ),
            ..Default::default()
        })
    }

    async fn service(
        provider: MockProvider,
    ) -> (SyncService, Arc<SqliteMediaRepository>, Arc<RecordingObserver>) {
        let repository = Arc::new(SqliteMediaRepository::new(test_pool().await));
        let observer = Arc::new(RecordingObserver::default());
        let service = SyncService::new(
            Arc::new(provider),
            repository.clone(),
            Normalizer::new(Arc::new(GenreTable::default())),
            observer.clone(),
            "de-DE",
        );
        (service, repository, observer)
    }

    #[tokio::test]
    async fn test_full_sync_saves_both_types() {
        let mut provider = MockProvider::default();
        provider.popular.insert(
            MediaType::Movie,
            vec![movie(1061474, "Superman", vec![28, 878])],
        );
        provider.popular.insert(
            MediaType::Series,
            vec![show(1399, "Game of Thrones", vec![18]), show(0, "Broken", vec![])],
        );
        let (service, repo, observer) = service(provider).await;

        let report = service.run_full_sync(Actor::System).await;

        assert!(!report.has_failures());
        assert_eq!(report.total_saved(), 2);
        assert_eq!(
            report.phase(MediaType::Series).unwrap().outcome,
            PhaseOutcome::Completed {
                fetched: 2,
                saved: 1,
                skipped: 1,
                failed: 0
            }
        );

        let superman = repo.find_by_tmdb_id(1061474).await.unwrap().unwrap();
        assert_eq!(superman.genres, "Action, Science Fiction");
        assert_eq!(superman.media_type, MediaType::Movie);

        assert_eq!(observer.phases.lock().len(), 2);
        assert_eq!(*observer.finished.lock(), 1);
    }

    #[tokio::test]
    async fn test_movie_failure_still_saves_series() {
        let mut provider = MockProvider::default();
        provider
            .popular
            .insert(MediaType::Series, vec![show(1399, "Game of Thrones", vec![18])]);
        let (service, repo, _) = service(provider).await;

        let report = service
            .run_full_sync(Actor::User("admin".to_string()))
            .await;

        let movies = report.phase(MediaType::Movie).unwrap();
        assert!(movies.is_failed());
        assert_eq!(report.phase(MediaType::Series).unwrap().saved(), 1);
        assert_eq!(repo.count(MediaType::Movie).await.unwrap(), 0);
        assert_eq!(repo.count(MediaType::Series).await.unwrap(), 1);
        assert_eq!(
            report.summary(),
            "TMDB sync finished: movies failed to fetch, tvshows 1/1 saved"
        );
    }

    #[tokio::test]
    async fn test_conflicting_media_type_counts_as_failed() {
        let mut provider = MockProvider::default();
        provider
            .popular
            .insert(MediaType::Movie, vec![movie(77, "Shared ID", vec![])]);
        provider
            .popular
            .insert(MediaType::Series, vec![show(77, "Shared ID", vec![])]);
        let (service, repo, _) = service(provider).await;

        let report = service.run_full_sync(Actor::System).await;

        assert_eq!(
            report.phase(MediaType::Series).unwrap().outcome,
            PhaseOutcome::Completed {
                fetched: 1,
                saved: 0,
                skipped: 0,
                failed: 1
            }
        );
        let stored = repo.find_by_tmdb_id(77).await.unwrap().unwrap();
        assert_eq!(stored.media_type, MediaType::Movie);
    }

    #[tokio::test]
    async fn test_backfill_updates_and_skips_failures() {
        let mut provider = MockProvider::default();
        provider
            .details
            .insert(1399, show_details(1399, "Game of Thrones", &[(18, "Drama")]));
        provider
            .details
            .insert(500, show_details(500, "No Genres", &[]));
        let languages = provider.detail_languages.clone();
        let (service, repo, observer) = service(provider).await;

        let series = |id: i64, title: &str| {
            UpsertMediaRequest::new(id, title, MediaType::Series).unwrap()
        };
        let got = repo.upsert(&series(1399, "Game of Thrones")).await.unwrap();
        repo.upsert(&series(500, "No Genres")).await.unwrap();
        let unreachable = repo.upsert(&series(42, "Unreachable")).await.unwrap();
        repo.upsert(&series(7, "Tagged").with_genres(["Comedy"]))
            .await
            .unwrap();

        let report = service.run_genre_backfill(Actor::System).await;

        assert_eq!(
            report.updated,
            vec![BackfillEntry {
                id: got,
                tmdb_id: 1399,
                title: "Game of Thrones".to_string(),
                media_type: MediaType::Series,
                genres: "Drama".to_string(),
            }]
        );
        assert_eq!(report.skipped, 2);

        let stored = repo.find_by_tmdb_id(1399).await.unwrap().unwrap();
        assert_eq!(stored.genres, "Drama");

        let missing: Vec<i64> = repo
            .find_missing_genres()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert!(missing.contains(&unreachable));
        assert_eq!(missing.len(), 2);

        // Only records missing genres hit the provider, in the detail language
        let languages = languages.lock();
        assert_eq!(languages.len(), 3);
        assert!(languages.iter().all(|l| l.as_deref() == Some("de-DE")));
        assert_eq!(*observer.finished.lock(), 1);
    }

    #[tokio::test]
    async fn test_sample_reports_to_observer() {
        let mut provider = MockProvider::default();
        provider.popular.insert(
            MediaType::Movie,
            (1..=10).map(|id| movie(id, "Movie", vec![])).collect(),
        );
        provider.popular.insert(MediaType::Series, Vec::new());
        let (service, _, observer) = service(provider).await;
        service.run_full_sync(Actor::System).await;

        let actor = Actor::User("editor".to_string());
        let sample = service
            .sample(&actor, MediaType::Movie, 8, SampleOrder::Random)
            .await
            .unwrap();

        assert_eq!(sample.len(), 8);
        assert_eq!(
            observer.samples.lock().as_slice(),
            &[("editor".to_string(), 8)]
        );
    }

    /// Provider whose listings carry one unreadable entry.
    struct PartlyBrokenProvider;

    #[async_trait]
    impl MediaProvider for PartlyBrokenProvider {
        async fn fetch_popular(
            &self,
            media_type: MediaType,
        ) -> Result<Vec<ListedRecord>, ProviderError> {
            let good = match media_type {
                MediaType::Movie => movie(1061474, "Superman", vec![28, 878]),
                MediaType::Series => show(1399, "Game of Thrones", vec![18]),
            };
            Ok(vec![
                Ok(good),
                Err(ProviderError::Decode {
                    path: "results[1].title".to_string(),
                    message: "invalid type: null, expected a string".to_string(),
                }),
            ])
        }

        async fn fetch_details(
            &self,
            _tmdb_id: i64,
            _media_type: MediaType,
            _language: Option<&str>,
        ) -> Result<RawRecord, ProviderError> {
            Err(ProviderError::Transport("unused".to_string()))
        }

        fn name(&self) -> &'static str {
            "partly-broken"
        }
    }

    #[tokio::test]
    async fn test_unreadable_item_is_skipped_not_fatal() {
        let repository = Arc::new(SqliteMediaRepository::new(test_pool().await));
        let service = SyncService::new(
            Arc::new(PartlyBrokenProvider),
            repository.clone(),
            Normalizer::new(Arc::new(GenreTable::default())),
            Arc::new(RecordingObserver::default()),
            "en-US",
        );

        let report = service.run_full_sync(Actor::System).await;

        for media_type in MediaType::ALL {
            assert_eq!(
                report.phase(media_type).unwrap().outcome,
                PhaseOutcome::Completed {
                    fetched: 2,
                    saved: 1,
                    skipped: 1,
                    failed: 0
                }
            );
        }
        assert!(repository.find_by_tmdb_id(1061474).await.unwrap().is_some());
        assert!(repository.find_by_tmdb_id(1399).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_tmdb_timeout_fails_only_its_phase() {
        use axum::{routing::get, Json, Router};
        use serde_json::json;
        use std::time::Duration;

        let app = Router::new()
            .route(
                "/3/movie/popular",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    Json(json!({"page": 1, "results": []}))
                }),
            )
            .route(
                "/3/tv/popular",
                get(|| async {
                    Json(json!({
                        "page": 1,
                        "results": [{"id": 1399, "name": "Game of Thrones", "genre_ids": [18]}]
                    }))
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(300))
            .build()
            .unwrap();
        let client = TmdbClient::new(http, "test-key").with_base_url(format!("http://{}/3", addr));
        let repository = Arc::new(SqliteMediaRepository::new(test_pool().await));
        let service = SyncService::new(
            Arc::new(TmdbProvider::new(Arc::new(client))),
            repository.clone(),
            Normalizer::new(Arc::new(GenreTable::default())),
            Arc::new(RecordingObserver::default()),
            "en-US",
        );

        let report = service.run_full_sync(Actor::System).await;

        match &report.phase(MediaType::Movie).unwrap().outcome {
            PhaseOutcome::Failed { reason } => assert!(reason.starts_with("Request timed out")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(report.phase(MediaType::Series).unwrap().saved(), 1);
        let stored = repository.find_by_tmdb_id(1399).await.unwrap().unwrap();
        assert_eq!(stored.genres, "Drama");
    }
}
