use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::error;
use url::Url;

use crate::domain::common::{SupabaseConfig, entities::app_errors::CoreError};

/// Thin HTTP wrapper over a Supabase project.
///
/// Table requests carry the caller's access token so the project's row-level
/// policies are evaluated for that user.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: Url,
    anon_key: String,
    client: Client,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, url::ParseError> {
        let mut raw = config.url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        Ok(Self {
            base_url: Url::parse(&raw)?,
            anon_key: config.anon_key.clone(),
            client: Client::new(),
        })
    }

    fn url(&self, path: &str) -> Result<Url, CoreError> {
        self.base_url.join(path).map_err(|e| {
            error!("Invalid Supabase path {}: {}", path, e);
            CoreError::InternalServerError
        })
    }

    /// Request against the auth (GoTrue) API.
    pub(crate) fn auth(&self, method: Method, path: &str) -> Result<RequestBuilder, CoreError> {
        let url = self.url(&format!("auth/v1/{}", path))?;

        Ok(self
            .client
            .request(method, url)
            .header("apikey", &self.anon_key))
    }

    /// Request against a PostgREST table on behalf of a user.
    pub(crate) fn table(
        &self,
        method: Method,
        table: &str,
        access_token: &str,
    ) -> Result<RequestBuilder, CoreError> {
        let url = self.url(&format!("rest/v1/{}", table))?;

        Ok(self
            .client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token))
    }
}

/// Send a PostgREST request and decode the returned rows.
pub(crate) async fn fetch_rows<T: DeserializeOwned>(
    request: RequestBuilder,
    table: &str,
) -> Result<Vec<T>, CoreError> {
    let response = request.send().await.map_err(|e| {
        error!("Supabase request on {} failed: {}", table, e);
        CoreError::StoreError
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        error!("Supabase error on {}: {} - {}", table, status, error_text);
        return Err(CoreError::StoreError);
    }

    response.json::<Vec<T>>().await.map_err(|e| {
        error!("Failed to decode {} rows: {}", table, e);
        CoreError::StoreError
    })
}

/// Query value for a PostgREST equality filter.
pub(crate) fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

/// Header asking PostgREST to echo written rows back.
pub(crate) const RETURN_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");
