pub mod mappers;
pub mod repositories;

pub use repositories::allergy_repository::SupabaseAllergyRepository;
