use crate::auth::{PasswordScheme, TokenService};
use crate::error::AppError;
use crate::store::AdminStore;

/// Checks `email`/`password` against the credential store and returns a signed access token.
///
/// An unknown email and a wrong password fail the same way, with
/// `AppError::Unauthorized("Invalid credentials")`.
pub async fn issue_token(
    admins: &dyn AdminStore,
    tokens: &TokenService,
    scheme: PasswordScheme,
    email: &str,
    password: &str,
) -> Result<String, AppError> {
    let admin = match admins.find_admin_by_email(email).await? {
        Some(admin)
            if scheme
                .matches_blocking(password.to_string(), admin.password.clone())
                .await? =>
        {
            admin
        }
        _ => {
            log::warn!("Rejected login attempt for {}", email);
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }
    };

    let token = tokens.issue(&admin)?;
    log::info!("Admin {} logged in", admin.email);
    Ok(token)
}
