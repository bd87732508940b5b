use allergyscan_core::domain::{
    analysis::entities::MealType,
    recommendation::{ports::RecommendationService, value_objects::RecommendMealsInput},
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recommendation::validators::RecommendMealsValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendMealsResponse {
    pub meal_type: MealType,
    pub recommendations: String,
}

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "recommendation",
    summary = "Suggest allergy-safe meals",
    description = "Asks for five recipes of the given meal type that avoid every allergy on file.",
    request_body = RecommendMealsValidator,
    responses(
        (status = 200, body = RecommendMealsResponse),
        (status = 400, description = "Unknown meal type or no allergies on file"),
        (status = 502, description = "Analysis failed")
    )
)]
pub async fn recommend_meals(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecommendMealsValidator>,
) -> Result<Response<RecommendMealsResponse>, ApiError> {
    let meal_type = payload
        .meal_type
        .parse::<MealType>()
        .map_err(ApiError::BadRequest)?;

    let recommendations = state
        .service
        .recommend_meals(
            identity,
            RecommendMealsInput {
                meal_type,
                cuisine: payload.cuisine,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendMealsResponse {
        meal_type,
        recommendations,
    }))
}
