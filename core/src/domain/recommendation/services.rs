use tracing::instrument;

use crate::domain::{
    allergy::ports::AllergyRepository,
    analysis::ports::{AnalysisService, LLMClient},
    authentication::{ports::AuthProvider, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    recommendation::{ports::RecommendationService, value_objects::RecommendMealsInput},
    scan_history::ports::ScanHistoryRepository,
};

impl<AU, AL, SH, OCR, LLM> RecommendationService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn recommend_meals(
        &self,
        identity: Identity,
        input: RecommendMealsInput,
    ) -> Result<String, CoreError> {
        let allergy_names = self
            .require_allergies(identity)
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();

        self.get_meal_recommendations(allergy_names, input.meal_type, input.cuisine)
            .await
    }
}
