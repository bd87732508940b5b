use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergy::{
        entities::{Allergy, AllergyChanges, NewAllergy},
        value_objects::{AllergyOrder, CreateAllergyInput, UpdateAllergyInput},
    },
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

/// Repository trait for the remote `allergies` table.
///
/// Every call is scoped to the identity's user.
#[cfg_attr(test, mockall::automock)]
pub trait AllergyRepository: Send + Sync {
    fn fetch_by_user(
        &self,
        identity: Identity,
        order: AllergyOrder,
    ) -> impl Future<Output = Result<Vec<Allergy>, CoreError>> + Send;

    fn create_allergy(
        &self,
        identity: Identity,
        allergy: NewAllergy,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    /// Returns `None` when no allergy with this id belongs to the user.
    fn update_allergy(
        &self,
        identity: Identity,
        allergy_id: Uuid,
        changes: AllergyChanges,
    ) -> impl Future<Output = Result<Option<Allergy>, CoreError>> + Send;

    /// Returns `false` when no allergy with this id belongs to the user.
    fn delete_allergy(
        &self,
        identity: Identity,
        allergy_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for managing a user's allergy profile
pub trait AllergyService: Send + Sync {
    fn list_allergies(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Allergy>, CoreError>> + Send;

    fn create_allergy(
        &self,
        identity: Identity,
        input: CreateAllergyInput,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn update_allergy(
        &self,
        identity: Identity,
        input: UpdateAllergyInput,
    ) -> impl Future<Output = Result<Allergy, CoreError>> + Send;

    fn delete_allergy(
        &self,
        identity: Identity,
        allergy_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
