use allergyscan_core::domain::dashboard::{entities::Dashboard, ports::DashboardService};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    summary = "Dashboard overview",
    description = "The caller's allergies, newest first, and their three most recent scans.",
    responses(
        (status = 200, body = Dashboard),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Dashboard>, ApiError> {
    let dashboard = state
        .service
        .get_dashboard(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(dashboard))
}
