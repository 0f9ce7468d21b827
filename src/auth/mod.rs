pub mod extractors;
pub mod login;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::AuthenticatedAdmin;
pub use login::issue_token;
pub use middleware::{AuthMiddleware, GuardPolicy};
pub use password::PasswordScheme;
pub use token::{Claims, TokenService, DEFAULT_TOKEN_TTL_SECS};

/// Represents the payload for `POST /login`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Admin email. Must not be empty.
    #[validate(length(min = 1))]
    pub email: String,
    /// Admin password. Must not be empty.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response body of a successful login.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The signed access token to send as `Authorization: Bearer <token>`.
    pub access_token: String,
}
