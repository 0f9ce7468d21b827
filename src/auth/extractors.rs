use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The admin identity decoded from a verified access token.
///
/// Only available on routes wrapped by `AuthMiddleware` whose policy gated the request;
/// the middleware stores the token's `Claims` in the request extensions. Without them this
/// extractor fails with `AppError::Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub id: i32,
    pub email: String,
}

impl From<Claims> for AuthenticatedAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

impl FromRequest for AuthenticatedAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(claims.into())),
            None => ready(Err(AppError::Unauthenticated.into())),
        }
    }
}
