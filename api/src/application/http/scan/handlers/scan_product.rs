use allergyscan_core::domain::scan::{
    entities::ProductScan, ports::ScanService, value_objects::ScanProductInput,
};
use axum::extract::{Multipart, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::multipart::{ProductScanForm, read_scan_form},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    summary = "Scan a product label",
    description = "Extracts the ingredient list from a photo of a product label and checks it against the caller's allergies. Photos without a readable ingredient list get a fixed answer and are not stored.",
    request_body(content = ProductScanForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ProductScan),
        (status = 400, description = "No image or no allergies on file"),
        (status = 413, description = "Image too large"),
        (status = 422, description = "Text could not be extracted from the image"),
        (status = 502, description = "Analysis failed")
    )
)]
pub async fn scan_product(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<ProductScan>, ApiError> {
    let form = read_scan_form(multipart, "product_name").await?;

    let scan = state
        .service
        .scan_product(
            identity,
            ScanProductInput {
                image: form.image,
                product_name: form.label,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(scan))
}
