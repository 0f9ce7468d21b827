use std::env;
use std::fmt;

use crate::auth::{PasswordScheme, DEFAULT_TOKEN_TTL_SECS};

/// Error raised while reading configuration at startup.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    Missing(&'static str),
    /// A variable is set but cannot be parsed.
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, reason } => write!(f, "{} is invalid: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Credentials of the admin created at startup when none with that email exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

pub struct Config {
    /// PostgreSQL connection string. The in-memory store is used when unset.
    pub database_url: Option<String>,
    pub server_port: u16,
    pub server_host: String,
    /// HS256 signing secret for access tokens.
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub password_scheme: PasswordScheme,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let server_port = match get("SERVER_PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "SERVER_PORT",
                reason: format!("'{}' is not a port number", port),
            })?,
            None => 8080,
        };

        let token_ttl_secs = match get("JWT_TTL_SECONDS") {
            Some(ttl) => match ttl.parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "JWT_TTL_SECONDS",
                        reason: format!("'{}' is not a positive number of seconds", ttl),
                    })
                }
            },
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let password_scheme = match get("PASSWORD_SCHEME") {
            Some(scheme) => scheme.parse::<PasswordScheme>().map_err(|reason| ConfigError::Invalid {
                key: "PASSWORD_SCHEME",
                reason,
            })?,
            None => PasswordScheme::default(),
        };

        let bootstrap_admin = match (get("BOOTSTRAP_ADMIN_EMAIL"), get("BOOTSTRAP_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("BOOTSTRAP_ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("BOOTSTRAP_ADMIN_EMAIL")),
        };

        Ok(Self {
            database_url: get("DATABASE_URL"),
            server_port,
            server_host: get("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            jwt_secret,
            token_ttl_secs,
            password_scheme,
            bootstrap_admin,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
