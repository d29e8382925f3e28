use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers;
use crate::models::{
    Actor, BackfillEntry, BackfillReport, PhaseOutcome, PhaseReport, RefreshData, SyncReport,
    SyncResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee API",
        version = "1.0.0"
    ),
    paths(
        handlers::refresh_movies,
        handlers::refresh_tvshows,
        handlers::sample_media,
        handlers::admin_refresh_movies,
        handlers::admin_refresh_tvshows,
        handlers::sync_now,
        handlers::backfill_genres,
    ),
    tags(
        (name = "media", description = "Stored popular movies and TV shows"),
        (name = "admin", description = "Sync and backfill triggers, bearer token required")
    ),
    components(schemas(
        domain::MediaRecord,
        domain::MediaType,
        domain::SampleOrder,
        Actor,
        RefreshData,
        PhaseOutcome,
        PhaseReport,
        SyncReport,
        SyncResponse,
        BackfillEntry,
        BackfillReport
    )),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by admin paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
