use crate::domain::{
    allergy::ports::AllergyRepository, analysis::ports::LLMClient,
    authentication::ports::AuthProvider, ocr::ports::TextExtractor,
    scan_history::ports::ScanHistoryRepository,
};

/// Application service wired with one adapter per port.
///
/// Every business-facing service trait (`AuthService`, `AllergyService`,
/// `ScanService`, ...) is implemented on this struct in its own domain module.
#[derive(Clone)]
pub struct Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    pub(crate) auth_provider: AU,
    pub(crate) allergy_repository: AL,
    pub(crate) scan_history_repository: SH,
    pub(crate) text_extractor: OCR,
    pub(crate) llm_client: LLM,
}

impl<AU, AL, SH, OCR, LLM> Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    pub fn new(
        auth_provider: AU,
        allergy_repository: AL,
        scan_history_repository: SH,
        text_extractor: OCR,
        llm_client: LLM,
    ) -> Self {
        Self {
            auth_provider,
            allergy_repository,
            scan_history_repository,
            text_extractor,
            llm_client,
        }
    }
}
