use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    scan::{
        entities::{MenuScan, ProductScan},
        value_objects::{ScanMenuInput, ScanProductInput},
    },
};

/// End-to-end scan pipelines: OCR, analysis, then history.
pub trait ScanService: Send + Sync {
    fn scan_product(
        &self,
        identity: Identity,
        input: ScanProductInput,
    ) -> impl Future<Output = Result<ProductScan, CoreError>> + Send;

    fn scan_menu(
        &self,
        identity: Identity,
        input: ScanMenuInput,
    ) -> impl Future<Output = Result<MenuScan, CoreError>> + Send;
}
