use axum::{extract::Multipart, http::StatusCode};
use bytes::Bytes;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10 MB

pub const IMAGE_FIELD: &str = "image";

/// Fields of a scan upload. `label` is the product or restaurant name,
/// depending on the route.
#[derive(Debug, Default)]
pub struct ScanForm {
    pub image: Option<Bytes>,
    pub label: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductScanForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    pub product_name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuScanForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    pub restaurant_name: Option<String>,
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> ApiError {
    error!("Failed to read multipart field: {}", e);

    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }

    ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
}

/// Reads the `image` part and the text part named `label_field`; other parts
/// are ignored. A missing image is left to the scan service to reject.
pub async fn read_scan_form(
    mut multipart: Multipart,
    label_field: &str,
) -> Result<ScanForm, ApiError> {
    let mut form = ScanForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        if name == IMAGE_FIELD {
            let data = field.bytes().await.map_err(multipart_error)?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::PayloadTooLarge(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            form.image = Some(data);
        } else if name == label_field {
            let text = field.text().await.map_err(multipart_error)?;
            form.label = Some(text);
        }
    }

    Ok(form)
}
