use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One completed scan. Created once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_name: Option<String>,
    pub ingredients: Vec<String>,
    /// Allergy names as they were at scan time, not references.
    pub matched_allergies: Vec<String>,
    pub has_matches: bool,
    pub analysis: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScanRecord {
    pub user_id: Uuid,
    pub product_name: Option<String>,
    pub ingredients: Vec<String>,
    pub matched_allergies: Vec<String>,
    pub has_matches: bool,
    pub analysis: String,
}
