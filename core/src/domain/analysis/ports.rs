use std::future::Future;

use crate::domain::{
    analysis::entities::{IngredientAnalysis, MealType},
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for single-turn prompt completion
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Risk analysis over extracted text and an allergy profile.
///
/// Every operation makes exactly one LLM call (none when short-circuited by the
/// caller) and maps any LLM failure to [`CoreError::AnalysisFailed`].
pub trait AnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        ingredients: Vec<String>,
        allergies: Vec<String>,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;

    fn get_meal_recommendations(
        &self,
        allergies: Vec<String>,
        meal_type: MealType,
        cuisine: Option<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn analyze_menu_items(
        &self,
        menu_text: String,
        allergies: Vec<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
