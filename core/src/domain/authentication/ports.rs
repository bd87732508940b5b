use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{AuthSession, User},
        value_objects::{Credentials, Identity},
    },
    common::entities::app_errors::CoreError,
};

/// Port for the hosted auth provider.
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider: Send + Sync {
    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn sign_up(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn sign_out(&self, access_token: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Resolve the user behind an access token.
    fn get_user(&self, access_token: String)
    -> impl Future<Output = Result<User, CoreError>> + Send;
}

pub trait AuthService: Send + Sync {
    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn sign_up(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn sign_out(&self, identity: Identity) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn authenticate(
        &self,
        access_token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
