use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{allergy::entities::Allergy, scan_history::entities::ScanRecord};

/// How many scans the dashboard shows.
pub const RECENT_SCANS_LIMIT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    /// Newest first.
    pub allergies: Vec<Allergy>,
    pub recent_scans: Vec<ScanRecord>,
}
