use allergyscan_core::domain::allergy::{entities::Allergy, ports::AllergyService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergiesResponse {
    pub data: Vec<Allergy>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergy",
    summary = "List allergies",
    description = "Returns the caller's allergies sorted by name.",
    responses(
        (status = 200, body = GetAllergiesResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_allergies(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetAllergiesResponse>, ApiError> {
    let allergies = state
        .service
        .list_allergies(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergiesResponse { data: allergies }))
}
