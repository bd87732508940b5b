use tracing::instrument;

use crate::domain::{
    allergy::ports::AllergyRepository,
    analysis::ports::LLMClient,
    authentication::{
        entities::AuthSession,
        ports::{AuthProvider, AuthService},
        value_objects::{Credentials, Identity},
    },
    common::{entities::app_errors::CoreError, services::Service},
    ocr::ports::TextExtractor,
    scan_history::ports::ScanHistoryRepository,
};

impl<AU, AL, SH, OCR, LLM> AuthService for Service<AU, AL, SH, OCR, LLM>
where
    AU: AuthProvider,
    AL: AllergyRepository,
    SH: ScanHistoryRepository,
    OCR: TextExtractor,
    LLM: LLMClient,
{
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        self.auth_provider.sign_in(normalize(credentials)).await
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn sign_up(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        self.auth_provider.sign_up(normalize(credentials)).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn sign_out(&self, identity: Identity) -> Result<(), CoreError> {
        self.auth_provider
            .sign_out(identity.access_token().to_string())
            .await
    }

    async fn authenticate(&self, access_token: String) -> Result<Identity, CoreError> {
        if access_token.trim().is_empty() {
            return Err(CoreError::Unauthorized);
        }

        let user = self
            .auth_provider
            .get_user(access_token.clone())
            .await
            .map_err(|e| {
                tracing::debug!("Access token rejected: {}", e);
                CoreError::Unauthorized
            })?;

        Ok(Identity::new(user, access_token))
    }
}

fn normalize(credentials: Credentials) -> Credentials {
    Credentials {
        email: credentials.email.trim().to_string(),
        password: credentials.password,
    }
}
