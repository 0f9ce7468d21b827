use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::{Claims, TokenService};
use crate::error::AppError;

/// Which requests on a wrapped scope must present a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Safe methods (GET, HEAD, OPTIONS, TRACE) pass; everything else needs a token.
    WritesOnly,
    /// Every request needs a token.
    AllMethods,
}

impl GuardPolicy {
    pub fn requires_token(&self, method: &Method) -> bool {
        match self {
            GuardPolicy::WritesOnly => !method.is_safe(),
            GuardPolicy::AllMethods => true,
        }
    }
}

/// Access guard for a scope.
///
/// Gated requests must carry `Authorization: Bearer <token>`. A valid token's `Claims` are
/// inserted into the request extensions; anything else is answered with
/// `AppError::Unauthenticated` before the handler runs. The `TokenService` is taken from
/// app data.
pub struct AuthMiddleware {
    policy: GuardPolicy,
}

impl AuthMiddleware {
    pub fn new(policy: GuardPolicy) -> Self {
        Self { policy }
    }

    pub fn writes_only() -> Self {
        Self::new(GuardPolicy::WritesOnly)
    }

    pub fn all_methods() -> Self {
        Self::new(GuardPolicy::AllMethods)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            policy: self.policy,
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    policy: GuardPolicy,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
/// The scheme name is matched case-insensitively.
pub fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|token| !token.is_empty())
}

fn authorize(req: &ServiceRequest) -> Result<Claims, AppError> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalServerError("Token service not configured".into()))?;

    let token = bearer_token(req).ok_or_else(|| {
        log::debug!("Missing bearer token for {} {}", req.method(), req.path());
        AppError::Unauthenticated
    })?;

    Ok(tokens.verify(token)?)
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.policy.requires_token(req.method()) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        match authorize(&req) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                let response = req.error_response(err).map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}
