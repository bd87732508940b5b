use allergyscan_core::domain::authentication::entities::User;

use crate::application::{
    auth::RequiredIdentity,
    http::server::api_entities::{api_error::ApiError, response::Response},
};

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_me(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<User>, ApiError> {
    Ok(Response::OK(identity.user().clone()))
}
