use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{analysis::entities::IngredientAnalysis, scan_history::entities::ScanRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductScan {
    pub product_name: String,
    pub extracted_text: String,
    /// Empty when the image did not contain a readable ingredient list.
    pub ingredients: Vec<String>,
    pub analysis: IngredientAnalysis,
    /// History record id; `None` when the scan short-circuited and nothing was stored.
    pub scan_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuScan {
    pub extracted_text: String,
    pub record: ScanRecord,
}
