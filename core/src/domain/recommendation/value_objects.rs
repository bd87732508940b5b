use crate::domain::analysis::entities::MealType;

#[derive(Debug, Clone)]
pub struct RecommendMealsInput {
    pub meal_type: MealType,
    pub cuisine: Option<String>,
}
