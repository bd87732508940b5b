use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::recommend_meals::{__path_recommend_meals, recommend_meals};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(recommend_meals))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommendations", state.args.server.root_path),
            post(recommend_meals),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
