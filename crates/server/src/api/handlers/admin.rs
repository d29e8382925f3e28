use axum::{extract::State, Extension, Json};
use domain::MediaType;

use super::media::refresh;
use crate::error::AppResult;
use crate::models::{Actor, ApiResponse, BackfillReport, RefreshData, SyncResponse};
use crate::state::AppState;

/// Random selection of stored movies, on behalf of the admin
#[utoipa::path(
    post,
    path = "/api/admin/refresh/movies",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Up to 8 random movies", body = ApiResponse<RefreshData>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn admin_refresh_movies(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<ApiResponse<RefreshData>>> {
    refresh(&state, &actor, MediaType::Movie).await
}

/// Random selection of stored TV shows, on behalf of the admin
#[utoipa::path(
    post,
    path = "/api/admin/refresh/tvshows",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Up to 8 random TV shows", body = ApiResponse<RefreshData>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn admin_refresh_tvshows(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<ApiResponse<RefreshData>>> {
    refresh(&state, &actor, MediaType::Series).await
}

/// Fetch popular movies and TV shows from TMDB now
#[utoipa::path(
    post,
    path = "/api/admin/sync",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Sync finished; per-type outcome in the report", body = ApiResponse<SyncResponse>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn sync_now(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Json<ApiResponse<SyncResponse>> {
    tracing::info!("Manual sync triggered by {}", actor);

    let report = state.sync.run_full_sync(actor).await;
    Json(ApiResponse::ok(SyncResponse {
        summary: report.summary(),
        report,
    }))
}

/// Fill in missing genres from TMDB detail lookups
#[utoipa::path(
    post,
    path = "/api/admin/backfill",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Records updated by the backfill", body = ApiResponse<BackfillReport>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn backfill_genres(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Json<ApiResponse<BackfillReport>> {
    tracing::info!("Genre backfill triggered by {}", actor);

    Json(ApiResponse::ok(state.sync.run_genre_backfill(actor).await))
}
