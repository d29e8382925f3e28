use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

const CREATE_MEDIA_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tmdb_id INTEGER NOT NULL UNIQUE,
        title TEXT NOT NULL,
        poster_path TEXT NOT NULL DEFAULT '',
        release_date TEXT,
        genres TEXT NOT NULL DEFAULT '',
        media_type TEXT NOT NULL DEFAULT 'movie' CHECK (media_type IN ('movie', 'tv')),
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_MEDIA_TYPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_media_type_id ON media (media_type, id)";

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Create the media table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MEDIA_TABLE).execute(pool).await?;
    sqlx::query(CREATE_MEDIA_TYPE_INDEX).execute(pool).await?;
    Ok(())
}

/// Single-connection in-memory pool; every connection would get its own database.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory sqlite pool")
}
