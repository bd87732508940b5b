use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    recommendation::value_objects::RecommendMealsInput,
};

pub trait RecommendationService: Send + Sync {
    /// Five recipes suited to the caller's stored allergies, as free text.
    fn recommend_meals(
        &self,
        identity: Identity,
        input: RecommendMealsInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
