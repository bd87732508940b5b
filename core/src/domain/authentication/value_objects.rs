use uuid::Uuid;

use crate::domain::authentication::entities::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated caller of a request.
///
/// Passed explicitly to every service call; the access token is forwarded to
/// the remote store so its row-level policies apply to the same user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user: User,
    access_token: String,
}

impl Identity {
    pub fn new(user: User, access_token: String) -> Self {
        Self { user, access_token }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}
