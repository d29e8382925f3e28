use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use domain::{MediaType, SampleOrder};

use crate::error::AppResult;
use crate::models::{Actor, ApiResponse, RefreshData, SampleQuery, DEFAULT_SAMPLE_LIMIT};
use crate::state::AppState;

pub(super) async fn refresh(
    state: &AppState,
    actor: &Actor,
    media_type: MediaType,
) -> AppResult<Json<ApiResponse<RefreshData>>> {
    let records = state
        .sync
        .sample(actor, media_type, DEFAULT_SAMPLE_LIMIT, SampleOrder::Random)
        .await?;
    Ok(Json(ApiResponse::ok(RefreshData::new(media_type, records))))
}

/// Random selection of stored movies
#[utoipa::path(
    get,
    path = "/api/refresh/movies",
    tag = "media",
    responses(
        (status = 200, description = "Up to 8 random movies", body = ApiResponse<RefreshData>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn refresh_movies(State(state): State<AppState>) -> AppResult<Json<ApiResponse<RefreshData>>> {
    refresh(&state, &Actor::System, MediaType::Movie).await
}

/// Random selection of stored TV shows
#[utoipa::path(
    get,
    path = "/api/refresh/tvshows",
    tag = "media",
    responses(
        (status = 200, description = "Up to 8 random TV shows", body = ApiResponse<RefreshData>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn refresh_tvshows(State(state): State<AppState>) -> AppResult<Json<ApiResponse<RefreshData>>> {
    refresh(&state, &Actor::System, MediaType::Series).await
}

/// Sample stored media of one type
#[utoipa::path(
    get,
    path = "/api/media/{media_type}",
    tag = "media",
    params(
        ("media_type" = String, Path, description = "`movie` or `tv`"),
        SampleQuery
    ),
    responses(
        (status = 200, description = "Stored records", body = ApiResponse<Vec<domain::MediaRecord>>),
        (status = 400, description = "Unknown media type or malformed query"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn sample_media(
    State(state): State<AppState>,
    Path(media_type): Path<String>,
    query: Result<Query<SampleQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<Vec<domain::MediaRecord>>>> {
    let media_type: MediaType = media_type.parse()?;
    let Query(query) = query?;
    let records = state
        .sync
        .sample(&Actor::System, media_type, query.limit(), query.order())
        .await?;
    Ok(Json(ApiResponse::ok(records)))
}
