use uuid::Uuid;

use crate::domain::allergy::entities::Severity;

#[derive(Debug, Clone)]
pub struct CreateAllergyInput {
    pub name: String,
    pub severity: Option<Severity>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateAllergyInput {
    pub allergy_id: Uuid,
    pub name: String,
    pub severity: Severity,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllergyOrder {
    /// Ascending by name.
    #[default]
    Name,
    /// Most recently created first.
    Newest,
}
