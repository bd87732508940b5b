use allergyscan_core::domain::allergy::{
    entities::Allergy, ports::AllergyService, value_objects::UpdateAllergyInput,
};
use axum::extract::State;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        allergy::validators::UpdateAllergyValidator,
        server::{
            api_entities::{
                api_error::{ApiError, PathParam, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{allergy_id}",
    tag = "allergy",
    summary = "Update an allergy",
    params(
        ("allergy_id" = Uuid, Path, description = "Allergy ID"),
    ),
    request_body = UpdateAllergyValidator,
    responses(
        (status = 200, body = Allergy),
        (status = 400, description = "Name blank or severity missing"),
        (status = 404, description = "Allergy not found")
    )
)]
pub async fn update_allergy(
    PathParam(allergy_id): PathParam<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAllergyValidator>,
) -> Result<Response<Allergy>, ApiError> {
    let allergy = state
        .service
        .update_allergy(
            identity,
            UpdateAllergyInput {
                allergy_id,
                name: payload.name,
                severity: payload.severity,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(allergy))
}
