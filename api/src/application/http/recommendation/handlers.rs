pub mod recommend_meals;
