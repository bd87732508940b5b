pub mod create_allergy;
pub mod delete_allergy;
pub mod get_allergies;
pub mod update_allergy;
