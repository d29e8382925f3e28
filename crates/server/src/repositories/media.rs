use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use domain::{
    DomainError, DomainResult, MediaRecord, MediaRepository, MediaType, SampleOrder,
    UpsertMediaRequest,
};
use sqlx::SqlitePool;

/// Common SELECT fields for media queries
const SELECT_MEDIA: &str = r#"
    SELECT
        id, tmdb_id, title, poster_path, release_date, genres, media_type,
        created_at, updated_at
    FROM media
"#;

/// Stored media, keyed by TMDB ID.
#[derive(Clone)]
pub struct SqliteMediaRepository {
    pool: SqlitePool,
}

impl SqliteMediaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn persistence(e: sqlx::Error) -> DomainError {
    DomainError::Persistence(e.to_string())
}

#[async_trait]
impl MediaRepository for SqliteMediaRepository {
    async fn upsert(&self, request: &UpsertMediaRequest) -> DomainResult<i64> {
        // An empty genre list never overwrites stored genres, and a row is
        // never moved to another media type.
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO media (tmdb_id, title, poster_path, release_date, genres, media_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(tmdb_id) DO UPDATE SET
                title = excluded.title,
                poster_path = excluded.poster_path,
                release_date = excluded.release_date,
                genres = CASE WHEN excluded.genres = '' THEN media.genres ELSE excluded.genres END,
                updated_at = CURRENT_TIMESTAMP
            WHERE media.media_type = excluded.media_type
            RETURNING id
            "#,
        )
        .bind(request.tmdb_id)
        .bind(&request.title)
        .bind(&request.poster_path)
        .bind(request.release_date)
        .bind(&request.genres)
        .bind(request.media_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence)?;

        id.ok_or_else(|| {
            DomainError::Conflict(format!(
                "tmdb_id {} is already stored with a different media type than '{}'",
                request.tmdb_id, request.media_type
            ))
        })
    }

    async fn update_genres(&self, id: i64, genres: &str) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE media SET genres = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(genres)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_missing_genres(&self) -> DomainResult<Vec<MediaRecord>> {
        let query = format!(
            "{} WHERE genres IS NULL OR TRIM(genres) = '' ORDER BY id",
            SELECT_MEDIA
        );
        let rows = sqlx::query_as::<_, MediaRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        rows.into_iter().map(MediaRecord::try_from).collect()
    }

    async fn find_by_tmdb_id(&self, tmdb_id: i64) -> DomainResult<Option<MediaRecord>> {
        let query = format!("{} WHERE tmdb_id = $1", SELECT_MEDIA);
        let row = sqlx::query_as::<_, MediaRow>(&query)
            .bind(tmdb_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(MediaRecord::try_from).transpose()
    }

    async fn sample(
        &self,
        media_type: MediaType,
        limit: u32,
        order: SampleOrder,
    ) -> DomainResult<Vec<MediaRecord>> {
        let order_by = match order {
            SampleOrder::Random => "RANDOM()",
            SampleOrder::Latest => "id DESC",
        };
        let query = format!(
            "{} WHERE media_type = $1 ORDER BY {} LIMIT $2",
            SELECT_MEDIA, order_by
        );
        let rows = sqlx::query_as::<_, MediaRow>(&query)
            .bind(media_type.as_str())
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        rows.into_iter().map(MediaRecord::try_from).collect()
    }

    async fn count(&self, media_type: MediaType) -> DomainResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media WHERE media_type = $1")
            .bind(media_type.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(count.0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct MediaRow {
    id: i64,
    tmdb_id: i64,
    title: String,
    poster_path: String,
    release_date: Option<NaiveDate>,
    genres: Option<String>,
    media_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MediaRow> for MediaRecord {
    type Error = DomainError;

    fn try_from(row: MediaRow) -> Result<Self, Self::Error> {
        let media_type = row
            .media_type
            .parse()
            .map_err(|e: domain::ParseMediaTypeError| DomainError::Persistence(e.to_string()))?;

        Ok(Self {
            id: row.id,
            tmdb_id: row.tmdb_id,
            title: row.title,
            poster_path: row.poster_path,
            release_date: row.release_date,
            genres: row.genres.unwrap_or_default(),
            media_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
