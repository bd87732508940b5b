use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, IntoParams)]
pub struct GetScansQuery {
    /// Maximum number of records to return, newest first.
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}
