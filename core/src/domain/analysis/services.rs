use tracing::instrument;

use crate::domain::{
    allergy::ports::AllergyRepository,
    analysis::{
        entities::{IngredientAnalysis, MealType},
        helpers::find_matched_allergies,
        ports::{AnalysisService, LLMClient},
        prompts::{
            allergy_risk_prompt, ingredient_safety_prompt, meal_recommendations_prompt,
            menu_analysis_prompt,
        },
    },
    authentication::ports::AuthProvider,
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    scan_history::ports::ScanHistoryRepository,
};

impl<AU, AL, SH, OCR, LLM> AnalysisService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(ingredients = ingredients.len(), allergies = allergies.len()))]
    async fn analyze_ingredients(
        &self,
        ingredients: Vec<String>,
        allergies: Vec<String>,
    ) -> Result<IngredientAnalysis, CoreError> {
        let matched_allergies = find_matched_allergies(&ingredients, &allergies);
        let has_matches = !matched_allergies.is_empty();

        let prompt = if has_matches {
            allergy_risk_prompt(&matched_allergies, &ingredients)
        } else {
            ingredient_safety_prompt(&allergies, &ingredients)
        };

        let text = self.complete(prompt).await?;

        Ok(IngredientAnalysis {
            text,
            has_matches,
            matched_allergies,
        })
    }

    #[instrument(skip(self, allergies))]
    async fn get_meal_recommendations(
        &self,
        allergies: Vec<String>,
        meal_type: MealType,
        cuisine: Option<String>,
    ) -> Result<String, CoreError> {
        let cuisine = cuisine
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("any"));

        let prompt = meal_recommendations_prompt(&allergies, meal_type, cuisine.as_deref());

        self.complete(prompt).await
    }

    #[instrument(skip_all, fields(menu_len = menu_text.len(), allergies = allergies.len()))]
    async fn analyze_menu_items(
        &self,
        menu_text: String,
        allergies: Vec<String>,
    ) -> Result<String, CoreError> {
        let prompt = menu_analysis_prompt(&menu_text, &allergies);

        self.complete(prompt).await
    }
}

impl<AU, AL, SH, OCR, LLM> Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    async fn complete(&self, prompt: String) -> Result<String, CoreError> {
        self.llm_client.generate_text(prompt).await.map_err(|e| {
            tracing::error!("Analysis request failed: {}", e);
            CoreError::AnalysisFailed
        })
    }
}
