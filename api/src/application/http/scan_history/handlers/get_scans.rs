use allergyscan_core::domain::scan_history::{entities::ScanRecord, ports::ScanHistoryService};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan_history::validators::GetScansQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScansResponse {
    pub data: Vec<ScanRecord>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List past scans",
    description = "Returns the caller's scan history, newest first.",
    params(GetScansQuery),
    responses(
        (status = 200, body = GetScansResponse),
        (status = 400, description = "Invalid limit")
    )
)]
pub async fn get_scans(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<GetScansQuery>,
) -> Result<Response<GetScansResponse>, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let scans = state
        .service
        .list_scans(identity, query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScansResponse { data: scans }))
}
