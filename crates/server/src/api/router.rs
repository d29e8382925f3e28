use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use super::{auth, handlers};
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/refresh/movies", post(handlers::admin_refresh_movies))
        .route("/refresh/tvshows", post(handlers::admin_refresh_tvshows))
        .route("/sync", post(handlers::sync_now))
        .route("/backfill", post(handlers::backfill_genres))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    Router::new()
        // Public read endpoints
        .route("/api/refresh/movies", get(handlers::refresh_movies))
        .route("/api/refresh/tvshows", get(handlers::refresh_tvshows))
        .route("/api/media/{media_type}", get(handlers::sample_media))
        // API document
        .route("/api/openapi.json", get(openapi_json))
        // Admin endpoints
        .nest("/api/admin", admin)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
