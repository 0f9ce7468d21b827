use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A stored administrator identity, used solely for login.
///
/// `password` holds whatever the configured `PasswordScheme` produced at creation time:
/// the raw value under `plain`, a bcrypt hash under `bcrypt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminRecord {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDate,
}

/// Payload for `POST /admin`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminInput {
    /// Explicit id. The store assigns the next free id when omitted.
    pub id: Option<i32>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl AdminRecord {
    /// Builds a record dated today from an already prepared input.
    pub fn new(id: i32, input: AdminInput) -> Self {
        Self {
            id,
            email: input.email,
            password: input.password,
            created_at: Utc::now().date_naive(),
        }
    }
}
