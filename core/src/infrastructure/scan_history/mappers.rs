use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::scan_history::entities::{NewScanRecord, ScanRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct ScanHistoryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub matched_allergies: Option<Vec<String>>,
    pub has_matches: bool,
    pub analysis: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewScanHistoryRow {
    pub user_id: Uuid,
    pub product_name: Option<String>,
    pub ingredients: Vec<String>,
    pub matched_allergies: Vec<String>,
    pub has_matches: bool,
    pub analysis: String,
}

impl From<ScanHistoryRow> for ScanRecord {
    fn from(row: ScanHistoryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            product_name: row.product_name,
            ingredients: row.ingredients.unwrap_or_default(),
            matched_allergies: row.matched_allergies.unwrap_or_default(),
            has_matches: row.has_matches,
            analysis: row.analysis,
            created_at: row.created_at,
        }
    }
}

impl From<NewScanRecord> for NewScanHistoryRow {
    fn from(record: NewScanRecord) -> Self {
        Self {
            user_id: record.user_id,
            product_name: record.product_name,
            ingredients: record.ingredients,
            matched_allergies: record.matched_allergies,
            has_matches: record.has_matches,
            analysis: record.analysis,
        }
    }
}
