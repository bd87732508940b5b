use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_me::{__path_get_me, get_me},
    sign_in::{__path_sign_in, sign_in},
    sign_out::{__path_sign_out, sign_out},
    sign_up::{__path_sign_up, sign_up},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(sign_up, sign_in, sign_out, get_me))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/auth/signup", root_path), post(sign_up))
        .route(&format!("{}/auth/login", root_path), post(sign_in))
        .route(&format!("{}/auth/logout", root_path), post(sign_out))
        .route(&format!("{}/auth/me", root_path), get(get_me))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
