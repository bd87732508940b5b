use tracing::instrument;

use crate::domain::{
    allergy::{ports::AllergyRepository, value_objects::AllergyOrder},
    analysis::ports::LLMClient,
    authentication::{ports::AuthProvider, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    dashboard::{
        entities::{Dashboard, RECENT_SCANS_LIMIT},
        ports::DashboardService,
    },
    ocr::ports::TextExtractor,
    scan_history::ports::ScanHistoryRepository,
};

impl<AU, AL, SH, OCR, LLM> DashboardService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_dashboard(&self, identity: Identity) -> Result<Dashboard, CoreError> {
        let allergies = self
            .allergy_repository
            .fetch_by_user(identity.clone(), AllergyOrder::Newest)
            .await?;

        let recent_scans = self
            .scan_history_repository
            .fetch_by_user(identity, Some(RECENT_SCANS_LIMIT))
            .await?;

        Ok(Dashboard {
            allergies,
            recent_scans,
        })
    }
}
