use allergyscan_core::domain::authentication::{entities::AuthSession, ports::AuthService};
use axum::extract::State;

use crate::application::http::{
    authentication::validators::CredentialsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Sign in with email and password",
    request_body = CredentialsValidator,
    responses(
        (status = 200, body = AuthSession),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CredentialsValidator>,
) -> Result<Response<AuthSession>, ApiError> {
    let session = state
        .service
        .sign_in(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(session))
}
