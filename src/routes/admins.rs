use crate::{
    auth::{AuthenticatedAdmin, PasswordScheme},
    error::AppError,
    models::AdminInput,
    store::AdminStore,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use validator::Validate;

/// Registers another admin.
///
/// Requires a bearer token. The password is stored in the form the configured
/// `PasswordScheme` prepares.
///
/// ## Responses:
/// - `201 Created`: Returns the new admin record.
/// - `400 Bad Request`: The id or email is already taken.
/// - `401 Unauthorized`: Missing or invalid token.
/// - `422 Unprocessable Entity`: Invalid email or empty password.
#[post("")]
pub async fn create_admin(
    admin: AuthenticatedAdmin,
    admins: web::Data<dyn AdminStore>,
    scheme: web::Data<PasswordScheme>,
    admin_data: web::Json<AdminInput>,
) -> Result<impl Responder, AppError> {
    admin_data.validate()?;

    let mut input = admin_data.into_inner();
    input.password = scheme.get_ref().prepare_blocking(input.password).await?;

    let created = admins.create_admin(input).await?;
    log::info!(
        "{} has been created at {} by {}",
        created.email,
        created.created_at,
        admin.email
    );

    Ok(HttpResponse::Created().json(created))
}

/// Lists every admin record.
///
/// Requires a bearer token.
#[get("")]
pub async fn get_admins(
    _admin: AuthenticatedAdmin,
    admins: web::Data<dyn AdminStore>,
) -> Result<impl Responder, AppError> {
    let admins = admins.list_admins().await?;
    Ok(HttpResponse::Ok().json(admins))
}
