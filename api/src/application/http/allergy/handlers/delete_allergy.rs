use allergyscan_core::domain::allergy::ports::AllergyService;
use axum::{
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::api_error::{ApiError, PathParam},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{allergy_id}",
    tag = "allergy",
    summary = "Delete an allergy",
    description = "Past scans keep the allergy names they matched.",
    params(
        ("allergy_id" = Uuid, Path, description = "Allergy ID"),
    ),
    responses(
        (status = 204, description = "Allergy deleted"),
        (status = 404, description = "Allergy not found")
    )
)]
pub async fn delete_allergy(
    PathParam(allergy_id): PathParam<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_allergy(identity, allergy_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
