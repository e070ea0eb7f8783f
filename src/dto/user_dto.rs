use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

/// Incoming representation for POST /v1/users. Missing fields decode to
/// their zero values; `uuid`, `created` and `modified` are generated by the
/// database, so anything the client sends for them is dropped here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            uuid: user.uuid,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            is_active: user.is_active,
            created: user.created,
            modified: user.modified,
        }
    }
}

/// Raw pagination parameters as they appear on the query string. Parsing
/// and clamping happen in the handler, so a non-numeric value degrades to
/// the default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}
