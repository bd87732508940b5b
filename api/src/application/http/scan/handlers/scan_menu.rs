use allergyscan_core::domain::scan::{
    entities::MenuScan, ports::ScanService, value_objects::ScanMenuInput,
};
use axum::extract::{Multipart, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::multipart::{MenuScanForm, read_scan_form},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/menu-scanner",
    tag = "scan",
    summary = "Scan a restaurant menu",
    description = "Extracts the text of a menu photo and asks for dish-by-dish advice against the caller's allergies. Every menu scan is stored in the history.",
    request_body(content = MenuScanForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = MenuScan),
        (status = 400, description = "No image or no allergies on file"),
        (status = 413, description = "Image too large"),
        (status = 422, description = "Text could not be extracted from the image"),
        (status = 502, description = "Analysis failed")
    )
)]
pub async fn scan_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<MenuScan>, ApiError> {
    let form = read_scan_form(multipart, "restaurant_name").await?;

    let scan = state
        .service
        .scan_menu(
            identity,
            ScanMenuInput {
                image: form.image,
                restaurant_name: form.label,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(scan))
}
