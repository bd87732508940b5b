use allergyscan_core::domain::scan_history::{entities::ScanRecord, ports::ScanHistoryService};
use axum::extract::State;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::{ApiError, PathParam},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{scan_id}",
    tag = "history",
    summary = "Get one scan",
    params(
        ("scan_id" = Uuid, Path, description = "Scan ID"),
    ),
    responses(
        (status = 200, body = ScanRecord),
        (status = 404, description = "Scan not found")
    )
)]
pub async fn get_scan(
    PathParam(scan_id): PathParam<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ScanRecord>, ApiError> {
    let scan = state
        .service
        .get_scan(identity, scan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(scan))
}
