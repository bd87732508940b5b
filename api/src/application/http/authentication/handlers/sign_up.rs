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
    path = "/signup",
    tag = "auth",
    summary = "Create an account",
    description = "Registers a new account with the auth provider. When email confirmation is enabled the returned session carries no access token.",
    request_body = CredentialsValidator,
    responses(
        (status = 201, body = AuthSession),
        (status = 400, description = "Invalid payload or rejected by the auth provider")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CredentialsValidator>,
) -> Result<Response<AuthSession>, ApiError> {
    let session = state
        .service
        .sign_up(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(session))
}
