use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use constant_time_eq::constant_time_eq;

use crate::error::AppError;
use crate::models::Actor;
use crate::state::AppState;

/// Gate for `/api/admin/*`.
///
/// Accepts `Authorization: Bearer <admin.token>` and attaches the configured
/// admin user as the request's [`Actor`]. With no token configured every
/// admin request is refused.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let admin = &state.settings.get().admin;
    let Some(expected) = admin.token.as_deref().filter(|t| !t.is_empty()) else {
        tracing::debug!("Admin request refused: no admin token configured");
        return Err(AppError::unauthorized());
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let authorized =
        provided.is_some_and(|token| constant_time_eq(token.as_bytes(), expected.as_bytes()));
    if !authorized {
        return Err(AppError::unauthorized());
    }

    request
        .extensions_mut()
        .insert(Actor::User(admin.username.clone()));
    Ok(next.run(request).await)
}
