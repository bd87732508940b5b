use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    allergy::entities::{Allergy, AllergyChanges, NewAllergy, Severity},
    common::entities::app_errors::CoreError,
};

/// Row of the `allergies` table as PostgREST returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct AllergyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub severity: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAllergyRow {
    pub user_id: Uuid,
    pub name: String,
    pub severity: Severity,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllergyChangesRow {
    pub name: String,
    pub severity: Severity,
    pub notes: Option<String>,
}

impl TryFrom<AllergyRow> for Allergy {
    type Error = CoreError;

    fn try_from(row: AllergyRow) -> Result<Self, Self::Error> {
        let severity = row.severity.parse::<Severity>().map_err(|e| {
            error!("Invalid allergy row {}: {}", row.id, e);
            CoreError::StoreError
        })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            severity,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

impl From<NewAllergy> for NewAllergyRow {
    fn from(allergy: NewAllergy) -> Self {
        Self {
            user_id: allergy.user_id,
            name: allergy.name,
            severity: allergy.severity,
            notes: allergy.notes,
        }
    }
}

impl From<AllergyChanges> for AllergyChangesRow {
    fn from(changes: AllergyChanges) -> Self {
        Self {
            name: changes.name,
            severity: changes.severity,
            notes: changes.notes,
        }
    }
}

pub fn map_allergies(rows: Vec<AllergyRow>) -> Result<Vec<Allergy>, CoreError> {
    rows.into_iter().map(Allergy::try_from).collect()
}
