use crate::{
    auth::{issue_token, LoginRequest, LoginResponse, PasswordScheme, TokenService},
    error::AppError,
    store::AdminStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Login admin
///
/// Checks the submitted email and password against the admin records and returns a signed
/// access token valid for the configured TTL.
///
/// ## Responses:
/// - `200 OK`: `{"accessToken": "..."}`.
/// - `400 Bad Request`: A field is missing from the body.
/// - `401 Unauthorized`: No admin matches the credentials.
/// - `422 Unprocessable Entity`: A field is empty.
#[post("/login")]
pub async fn login(
    admins: web::Data<dyn AdminStore>,
    tokens: web::Data<TokenService>,
    scheme: web::Data<PasswordScheme>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let access_token = issue_token(
        admins.get_ref(),
        tokens.get_ref(),
        *scheme.get_ref(),
        &login_data.email,
        &login_data.password,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}
