use chrono::{DateTime, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::AdminRecord;

/// Default access token lifetime: one hour.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Represents the claims encoded within an access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token: the admin's id.
    pub sub: i32,
    /// The admin's email at issuance time.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch). The token is rejected from this second on.
    pub exp: i64,
    /// Random token identifier.
    pub jti: String,
}

/// Signs and verifies access tokens with a single HS256 secret.
///
/// Built once at startup from `Config` and shared through `web::Data`; the secret is never
/// read from the process environment here.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` against an explicit clock, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issues a token for `admin`, valid for the configured TTL from now.
    pub fn issue(&self, admin: &AdminRecord) -> Result<String, AppError> {
        self.issue_at(admin, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(&self, admin: &AdminRecord, now: DateTime<Utc>) -> Result<String, AppError> {
        let issued_at = now.timestamp();
        let claims = Claims {
            sub: admin.id,
            email: admin.email.clone(),
            iat: issued_at,
            exp: issued_at + self.ttl_secs,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies the signature and expiry of `token` against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as if the current time were `now`.
    ///
    /// Accepted iff the signature matches and `now < exp`. Returns
    /// `ErrorKind::ExpiredSignature` once `now` reaches `exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)?.claims;

        if now.timestamp() >= claims.exp {
            return Err(ErrorKind::ExpiredSignature.into());
        }
        Ok(claims)
    }
}
