use crate::error::AppError;
use actix_web::web;
use bcrypt::{hash, verify, DEFAULT_COST};
use std::fmt;
use std::str::FromStr;

/// How admin passwords are stored and compared.
///
/// `Plain` stores the password as given and compares with `==`. It matches the existing
/// admin records this service was built against and is not fit for production data;
/// deployments with real credentials should run with `Bcrypt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Plain,
    Bcrypt,
}

impl PasswordScheme {
    /// Turns a submitted password into its stored form.
    pub fn prepare(&self, password: &str) -> Result<String, AppError> {
        match self {
            PasswordScheme::Plain => Ok(password.to_string()),
            PasswordScheme::Bcrypt => hash(password, DEFAULT_COST)
                .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e))),
        }
    }

    /// Checks a login attempt against a stored password.
    ///
    /// A stored value that is not a bcrypt hash never matches under `Bcrypt`.
    pub fn matches(&self, candidate: &str, stored: &str) -> bool {
        match self {
            PasswordScheme::Plain => candidate == stored,
            PasswordScheme::Bcrypt => verify(candidate, stored).unwrap_or_else(|e| {
                log::warn!("Stored password is not a usable bcrypt hash: {}", e);
                false
            }),
        }
    }

    /// Turns a submitted password into its stored form on the blocking thread pool.
    pub async fn prepare_blocking(self, password: String) -> Result<String, AppError> {
        web::block(move || self.prepare(&password))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Password hashing aborted: {}", e)))?
    }

    /// Runs [`matches`](Self::matches) on the blocking thread pool.
    pub async fn matches_blocking(self, candidate: String, stored: String) -> Result<bool, AppError> {
        web::block(move || self.matches(&candidate, &stored))
            .await
            .map_err(|e| {
                AppError::InternalServerError(format!("Password verification aborted: {}", e))
            })
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(PasswordScheme::Plain),
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            other => Err(format!("unknown password scheme '{}'", other)),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PasswordScheme::Plain => write!(f, "plain"),
            PasswordScheme::Bcrypt => write!(f, "bcrypt"),
        }
    }
}
