use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    scan_history::entities::{NewScanRecord, ScanRecord},
};

/// Repository trait for the remote `scan_history` table
#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    /// Newest first.
    fn fetch_by_user(
        &self,
        identity: Identity,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;

    /// Looks a record up by id *and* owner, so a record belonging to another
    /// user is reported exactly like a missing one.
    fn get_by_id(
        &self,
        identity: Identity,
        scan_id: Uuid,
    ) -> impl Future<Output = Result<Option<ScanRecord>, CoreError>> + Send;

    fn create_record(
        &self,
        identity: Identity,
        record: NewScanRecord,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;
}

pub trait ScanHistoryService: Send + Sync {
    fn list_scans(
        &self,
        identity: Identity,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;

    fn get_scan(
        &self,
        identity: Identity,
        scan_id: Uuid,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;
}
