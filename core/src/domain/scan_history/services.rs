use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    allergy::ports::AllergyRepository,
    analysis::ports::LLMClient,
    authentication::{ports::AuthProvider, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    scan_history::{
        entities::ScanRecord,
        ports::{ScanHistoryRepository, ScanHistoryService},
    },
};

impl<AU, AL, SH, OCR, LLM> ScanHistoryService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn list_scans(
        &self,
        identity: Identity,
        limit: Option<u32>,
    ) -> Result<Vec<ScanRecord>, CoreError> {
        self.scan_history_repository
            .fetch_by_user(identity, limit)
            .await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_scan(&self, identity: Identity, scan_id: Uuid) -> Result<ScanRecord, CoreError> {
        self.scan_history_repository
            .get_by_id(identity, scan_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
