use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use utoipa::OpenApi;

use super::{
    handlers::{
        scan_menu::{__path_scan_menu, scan_menu},
        scan_product::{__path_scan_product, scan_product},
    },
    multipart::MAX_IMAGE_SIZE,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(scan_product, scan_menu))]
pub struct ScanApiDoc;

/// Room for the text parts and multipart framing around the image.
const FORM_OVERHEAD: usize = 64 * 1024;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan", state.args.server.root_path),
            post(scan_product),
        )
        .route(
            &format!("{}/menu-scanner", state.args.server.root_path),
            post(scan_menu),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + FORM_OVERHEAD))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
