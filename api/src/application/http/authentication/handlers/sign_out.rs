use allergyscan_core::domain::authentication::ports::AuthService;
use axum::{extract::State, http::StatusCode};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Sign out",
    description = "Revokes the caller's session at the auth provider.",
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn sign_out(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .sign_out(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
