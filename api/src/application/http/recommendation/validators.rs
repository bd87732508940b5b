use allergyscan_core::domain::analysis::entities::MealType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_meal_type(meal_type: &str) -> Result<(), ValidationError> {
    meal_type.parse::<MealType>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("meal_type");
        error.message =
            Some("meal_type must be one of Breakfast, Lunch, Dinner, Snacks, Desserts".into());
        error
    })
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendMealsValidator {
    #[validate(custom(function = "validate_meal_type"))]
    pub meal_type: String,

    /// Cuisine to draw from; "Any" or empty means no preference.
    #[serde(default)]
    pub cuisine: Option<String>,
}
