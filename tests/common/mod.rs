#![allow(dead_code)]
#![allow(unused_macros)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::json;

use bookshelf::auth::{LoginResponse, PasswordScheme, TokenService, DEFAULT_TOKEN_TTL_SECS};
use bookshelf::models::{AdminInput, BookInput};
use bookshelf::store::{AdminStore, BookStore, MemoryStore};
use bookshelf::AppState;

pub const SECRET: &[u8] = b"integration_test_secret";

/// Builds the full application around `$state`, wrapped the way `main` wraps it.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::Logger::default())
                .configure(|cfg| $state.configure(cfg)),
        )
        .await
    };
}

/// State over an in-memory store holding admin `{id: 1, email: "a@x.com", password: "p"}`.
pub async fn seeded_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    store
        .create_admin(AdminInput {
            id: Some(1),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        })
        .await
        .expect("seed admin");

    let state = AppState::new(
        TokenService::new(SECRET, DEFAULT_TOKEN_TTL_SECS),
        PasswordScheme::Plain,
        store.clone(),
    );
    (state, store)
}

pub async fn add_book(store: &MemoryStore, id: i32, title: &str) {
    store
        .create_book(BookInput {
            id: Some(id),
            title: title.to_string(),
            author: "Octavia E. Butler".to_string(),
            url: None,
        })
        .await
        .expect("seed book");
}

/// Logs in through `POST /login` and returns the access token.
pub async fn login<S, B>(app: &S, email: &str, password: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK, "login failed");

    let body: LoginResponse = test::read_body_json(resp).await;
    body.access_token
}
