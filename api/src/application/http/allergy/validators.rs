use allergyscan_core::domain::allergy::entities::Severity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAllergyValidator {
    #[validate(length(min = 1, message = "Allergy name is required"))]
    pub name: String,

    /// Defaults to `mild`.
    #[serde(default)]
    pub severity: Option<Severity>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Full replacement of an allergy's editable fields.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAllergyValidator {
    #[validate(length(min = 1, message = "Allergy name is required"))]
    pub name: String,

    pub severity: Severity,

    #[serde(default)]
    pub notes: Option<String>,
}
