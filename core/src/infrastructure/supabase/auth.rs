use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        authentication::{
            entities::{AuthSession, User},
            ports::AuthProvider,
            value_objects::Credentials,
        },
        common::entities::app_errors::CoreError,
    },
    infrastructure::supabase::client::SupabaseClient,
};

#[derive(Debug, Clone)]
pub struct SupabaseAuthProvider {
    client: SupabaseClient,
}

impl SupabaseAuthProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: GoTrueUser,
}

/// Sign-up answers with a full session when confirmations are off, and with
/// the bare user when an email confirmation is pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    PendingConfirmation(GoTrueUser),
}

impl From<GoTrueUser> for User {
    fn from(user: GoTrueUser) -> Self {
        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
        }
    }
}

impl From<TokenResponse> for AuthSession {
    fn from(token: TokenResponse) -> Self {
        Self {
            user: token.user.into(),
            access_token: Some(token.access_token),
            refresh_token: token.refresh_token,
            expires_in: token.expires_in,
        }
    }
}

impl From<SignUpResponse> for AuthSession {
    fn from(response: SignUpResponse) -> Self {
        match response {
            SignUpResponse::Session(token) => token.into(),
            SignUpResponse::PendingConfirmation(user) => Self {
                user: user.into(),
                access_token: None,
                refresh_token: None,
                expires_in: None,
            },
        }
    }
}

/// Pull the human-readable message out of a GoTrue error body.
fn provider_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

async fn ensure_success(response: Response) -> Result<Response, CoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = provider_message(&body).unwrap_or_else(|| status.to_string());
    tracing::warn!("Auth provider rejected request: {} - {}", status, message);

    Err(CoreError::AuthProvider(message))
}

fn transport_error(e: reqwest::Error) -> CoreError {
    error!("Auth provider request failed: {}", e);
    CoreError::AuthProvider(e.to_string())
}

fn decode_error(e: reqwest::Error) -> CoreError {
    error!("Failed to decode auth provider response: {}", e);
    CoreError::InternalServerError
}

impl AuthProvider for SupabaseAuthProvider {
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        let response = self
            .client
            .auth(Method::POST, "token")?
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let token: TokenResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(decode_error)?;

        Ok(token.into())
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        let response = self
            .client
            .auth(Method::POST, "signup")?
            .json(&PasswordGrant {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let signup: SignUpResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(decode_error)?;

        Ok(signup.into())
    }

    async fn sign_out(&self, access_token: String) -> Result<(), CoreError> {
        let response = self
            .client
            .auth(Method::POST, "logout")?
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: String) -> Result<User, CoreError> {
        let response = self
            .client
            .auth(Method::GET, "user")?
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        let user: GoTrueUser = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(decode_error)?;

        Ok(user.into())
    }
}
