use allergyscan_core::domain::allergy::{
    entities::Allergy, ports::AllergyService, value_objects::CreateAllergyInput,
};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        allergy::validators::CreateAllergyValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "allergy",
    summary = "Add an allergy",
    request_body = CreateAllergyValidator,
    responses(
        (status = 201, body = Allergy),
        (status = 400, description = "Name missing or blank")
    )
)]
pub async fn create_allergy(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateAllergyValidator>,
) -> Result<Response<Allergy>, ApiError> {
    let allergy = state
        .service
        .create_allergy(
            identity,
            CreateAllergyInput {
                name: payload.name,
                severity: payload.severity,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(allergy))
}
