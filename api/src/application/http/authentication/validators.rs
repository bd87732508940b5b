use allergyscan_core::domain::authentication::value_objects::Credentials;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CredentialsValidator {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<CredentialsValidator> for Credentials {
    fn from(payload: CredentialsValidator) -> Self {
        Self {
            email: payload.email,
            password: payload.password,
        }
    }
}
