use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for turning an image into raw text.
///
/// Implementations acquire their engine per call and must release it before
/// returning, whether recognition succeeded or not.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, image: Bytes) -> impl Future<Output = Result<String, CoreError>> + Send;
}
