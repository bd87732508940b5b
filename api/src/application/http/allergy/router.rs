use axum::{
    Router, middleware,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    create_allergy::{__path_create_allergy, create_allergy},
    delete_allergy::{__path_delete_allergy, delete_allergy},
    get_allergies::{__path_get_allergies, get_allergies},
    update_allergy::{__path_update_allergy, update_allergy},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_allergies, create_allergy, update_allergy, delete_allergy))]
pub struct AllergyApiDoc;

pub fn allergy_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/allergies", state.args.server.root_path),
            get(get_allergies).post(create_allergy),
        )
        .route(
            &format!("{}/allergies/{{allergy_id}}", state.args.server.root_path),
            put(update_allergy).delete(delete_allergy),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
