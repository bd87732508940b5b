use reqwest::Method;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        authentication::value_objects::Identity,
        common::entities::app_errors::CoreError,
        scan_history::{
            entities::{NewScanRecord, ScanRecord},
            ports::ScanHistoryRepository,
        },
    },
    infrastructure::{
        scan_history::mappers::{NewScanHistoryRow, ScanHistoryRow},
        supabase::client::{RETURN_REPRESENTATION, SupabaseClient, eq, fetch_rows},
    },
};

const TABLE: &str = "scan_history";

#[derive(Debug, Clone)]
pub struct SupabaseScanHistoryRepository {
    client: SupabaseClient,
}

impl SupabaseScanHistoryRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

impl ScanHistoryRepository for SupabaseScanHistoryRepository {
    async fn fetch_by_user(
        &self,
        identity: Identity,
        limit: Option<u32>,
    ) -> Result<Vec<ScanRecord>, CoreError> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("user_id", eq(identity.id())),
            ("order", "created_at.desc".to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let request = self
            .client
            .table(Method::GET, TABLE, identity.access_token())?
            .query(&query);

        let rows: Vec<ScanHistoryRow> = fetch_rows(request, TABLE).await?;
        Ok(rows.into_iter().map(ScanRecord::from).collect())
    }

    async fn get_by_id(
        &self,
        identity: Identity,
        scan_id: Uuid,
    ) -> Result<Option<ScanRecord>, CoreError> {
        let request = self
            .client
            .table(Method::GET, TABLE, identity.access_token())?
            .query(&[
                ("select", "*".to_string()),
                ("id", eq(scan_id)),
                ("user_id", eq(identity.id())),
                ("limit", "1".to_string()),
            ]);

        let rows: Vec<ScanHistoryRow> = fetch_rows(request, TABLE).await?;
        Ok(rows.into_iter().next().map(ScanRecord::from))
    }

    async fn create_record(
        &self,
        identity: Identity,
        record: NewScanRecord,
    ) -> Result<ScanRecord, CoreError> {
        let request = self
            .client
            .table(Method::POST, TABLE, identity.access_token())?
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&NewScanHistoryRow::from(record));

        let rows: Vec<ScanHistoryRow> = fetch_rows(request, TABLE).await?;

        rows.into_iter().next().map(ScanRecord::from).ok_or_else(|| {
            error!("Insert into {} returned no row", TABLE);
            CoreError::StoreError
        })
    }
}
