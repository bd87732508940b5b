use reqwest::Method;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        allergy::{
            entities::{Allergy, AllergyChanges, NewAllergy},
            ports::AllergyRepository,
            value_objects::AllergyOrder,
        },
        authentication::value_objects::Identity,
        common::entities::app_errors::CoreError,
    },
    infrastructure::{
        allergy::mappers::{AllergyChangesRow, AllergyRow, NewAllergyRow, map_allergies},
        supabase::client::{RETURN_REPRESENTATION, SupabaseClient, eq, fetch_rows},
    },
};

const TABLE: &str = "allergies";

#[derive(Debug, Clone)]
pub struct SupabaseAllergyRepository {
    client: SupabaseClient,
}

impl SupabaseAllergyRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn order_clause(order: AllergyOrder) -> &'static str {
    match order {
        AllergyOrder::Name => "name.asc",
        AllergyOrder::Newest => "created_at.desc",
    }
}

impl AllergyRepository for SupabaseAllergyRepository {
    async fn fetch_by_user(
        &self,
        identity: Identity,
        order: AllergyOrder,
    ) -> Result<Vec<Allergy>, CoreError> {
        let request = self
            .client
            .table(Method::GET, TABLE, identity.access_token())?
            .query(&[
                ("select", "*".to_string()),
                ("user_id", eq(identity.id())),
                ("order", order_clause(order).to_string()),
            ]);

        let rows: Vec<AllergyRow> = fetch_rows(request, TABLE).await?;
        map_allergies(rows)
    }

    async fn create_allergy(
        &self,
        identity: Identity,
        allergy: NewAllergy,
    ) -> Result<Allergy, CoreError> {
        let request = self
            .client
            .table(Method::POST, TABLE, identity.access_token())?
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&NewAllergyRow::from(allergy));

        let rows: Vec<AllergyRow> = fetch_rows(request, TABLE).await?;

        map_allergies(rows)?.into_iter().next().ok_or_else(|| {
            error!("Insert into {} returned no row", TABLE);
            CoreError::StoreError
        })
    }

    async fn update_allergy(
        &self,
        identity: Identity,
        allergy_id: Uuid,
        changes: AllergyChanges,
    ) -> Result<Option<Allergy>, CoreError> {
        let request = self
            .client
            .table(Method::PATCH, TABLE, identity.access_token())?
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .query(&[("id", eq(allergy_id)), ("user_id", eq(identity.id()))])
            .json(&AllergyChangesRow::from(changes));

        let rows: Vec<AllergyRow> = fetch_rows(request, TABLE).await?;
        Ok(map_allergies(rows)?.into_iter().next())
    }

    async fn delete_allergy(&self, identity: Identity, allergy_id: Uuid) -> Result<bool, CoreError> {
        let request = self
            .client
            .table(Method::DELETE, TABLE, identity.access_token())?
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .query(&[("id", eq(allergy_id)), ("user_id", eq(identity.id()))]);

        let rows: Vec<AllergyRow> = fetch_rows(request, TABLE).await?;
        Ok(!rows.is_empty())
    }
}
