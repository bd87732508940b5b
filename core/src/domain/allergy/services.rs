use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    allergy::{
        entities::{Allergy, AllergyChanges, NewAllergy},
        ports::{AllergyRepository, AllergyService},
        value_objects::{AllergyOrder, CreateAllergyInput, UpdateAllergyInput},
    },
    analysis::ports::LLMClient,
    authentication::{ports::AuthProvider, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    scan_history::ports::ScanHistoryRepository,
};

impl<AU, AL, SH, OCR, LLM> AllergyService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn list_allergies(&self, identity: Identity) -> Result<Vec<Allergy>, CoreError> {
        self.allergy_repository
            .fetch_by_user(identity, AllergyOrder::Name)
            .await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn create_allergy(
        &self,
        identity: Identity,
        input: CreateAllergyInput,
    ) -> Result<Allergy, CoreError> {
        let name = required_name(&input.name)?;

        let allergy = NewAllergy {
            user_id: identity.id(),
            name,
            severity: input.severity.unwrap_or_default(),
            notes: clean_notes(input.notes),
        };

        self.allergy_repository
            .create_allergy(identity, allergy)
            .await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), allergy_id = %input.allergy_id))]
    async fn update_allergy(
        &self,
        identity: Identity,
        input: UpdateAllergyInput,
    ) -> Result<Allergy, CoreError> {
        let name = required_name(&input.name)?;

        let changes = AllergyChanges {
            name,
            severity: input.severity,
            notes: clean_notes(input.notes),
        };

        self.allergy_repository
            .update_allergy(identity, input.allergy_id, changes)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn delete_allergy(&self, identity: Identity, allergy_id: Uuid) -> Result<(), CoreError> {
        let deleted = self
            .allergy_repository
            .delete_allergy(identity, allergy_id)
            .await?;

        if !deleted {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

fn required_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid("Allergy name is required".to_string()));
    }
    Ok(name.to_string())
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}
