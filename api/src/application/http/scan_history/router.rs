use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_scan::{__path_get_scan, get_scan},
    get_scans::{__path_get_scans, get_scans},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_scans, get_scan))]
pub struct ScanHistoryApiDoc;

pub fn scan_history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_scans),
        )
        .route(
            &format!("{}/history/{{scan_id}}", state.args.server.root_path),
            get(get_scan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
