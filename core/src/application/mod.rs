use anyhow::Context;

use crate::{
    domain::common::{AllergyScanConfig, services::Service},
    infrastructure::{
        allergy::SupabaseAllergyRepository,
        llm::GeminiLLMClient,
        ocr::TesseractOcr,
        scan_history::SupabaseScanHistoryRepository,
        supabase::{SupabaseAuthProvider, SupabaseClient},
    },
};

pub type AllergyScanService = Service<
    SupabaseAuthProvider,
    SupabaseAllergyRepository,
    SupabaseScanHistoryRepository,
    TesseractOcr,
    GeminiLLMClient,
>;

pub fn create_service(config: AllergyScanConfig) -> Result<AllergyScanService, anyhow::Error> {
    let supabase = SupabaseClient::new(&config.supabase)
        .with_context(|| format!("invalid Supabase URL: {}", config.supabase.url))?;

    Ok(Service::new(
        SupabaseAuthProvider::new(supabase.clone()),
        SupabaseAllergyRepository::new(supabase.clone()),
        SupabaseScanHistoryRepository::new(supabase),
        TesseractOcr::new(&config.ocr),
        GeminiLLMClient::from_config(&config.llm),
    ))
}
