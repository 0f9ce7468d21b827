#[macro_use]
mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use bookshelf::auth::{TokenService, DEFAULT_TOKEN_TTL_SECS};
use bookshelf::models::AdminRecord;

#[actix_rt::test]
async fn test_login_returns_token_for_admin() {
    let (state, _store) = common::seeded_state().await;
    let app = test_app!(state);

    let token = common::login(&app, "a@x.com", "p").await;
    assert!(!token.is_empty(), "Token should be a non-empty string");

    let claims = TokenService::new(common::SECRET, DEFAULT_TOKEN_TTL_SECS)
        .verify(&token)
        .expect("token should verify with the shared secret");
    assert_eq!(claims.sub, 1);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let (state, _store) = common::seeded_state().await;
    let app = test_app!(state);

    let mut bodies = Vec::new();
    for payload in [
        json!({ "email": "a@x.com", "password": "wrong" }),
        json!({ "email": "nobody@x.com", "password": "p" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "payload: {}", payload);
        let body: Value = test::read_body_json(resp).await;
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0], json!({ "error": "Invalid credentials" }));
}

#[actix_rt::test]
async fn test_invalid_login_inputs() {
    let (state, _store) = common::seeded_state().await;
    let app = test_app!(state);

    let test_cases = vec![
        (json!({ "password": "p" }), StatusCode::BAD_REQUEST, "missing email"),
        (json!({ "email": "a@x.com" }), StatusCode::BAD_REQUEST, "missing password"),
        (
            json!({ "email": "", "password": "p" }),
            StatusCode::UNPROCESSABLE_ENTITY,
            "empty email",
        ),
        (
            json!({ "email": "a@x.com", "password": "" }),
            StatusCode::UNPROCESSABLE_ENTITY,
            "empty password",
        ),
    ];

    for (payload, expected_status, description) in test_cases {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected_status, "Test case failed: {}", description);
    }
}

#[actix_rt::test]
async fn test_token_from_another_secret_is_rejected() {
    let (state, _store) = common::seeded_state().await;
    let app = test_app!(state);

    let admin = AdminRecord {
        id: 1,
        email: "a@x.com".to_string(),
        password: "p".to_string(),
        created_at: Utc::now().date_naive(),
    };
    let forged = TokenService::new(b"someone_elses_secret", DEFAULT_TOKEN_TTL_SECS)
        .issue_at(&admin, Utc::now() + Duration::days(30))
        .unwrap();

    let req = test::TestRequest::delete()
        .uri("/books/5")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", forged)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_expired_token_looks_like_missing_token() {
    let (state, _store) = common::seeded_state().await;
    let app = test_app!(state);

    let admin = AdminRecord {
        id: 1,
        email: "a@x.com".to_string(),
        password: "p".to_string(),
        created_at: Utc::now().date_naive(),
    };
    let expired = TokenService::new(common::SECRET, DEFAULT_TOKEN_TTL_SECS)
        .issue_at(&admin, Utc::now() - Duration::hours(2))
        .unwrap();

    let with_expired = test::TestRequest::delete()
        .uri("/books/5")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, with_expired).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let expired_body: Value = test::read_body_json(resp).await;

    let without_token = test::TestRequest::delete().uri("/books/5").to_request();
    let resp = test::call_service(&app, without_token).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let missing_body: Value = test::read_body_json(resp).await;

    assert_eq!(expired_body, missing_body);
}

#[actix_rt::test]
async fn test_admin_scope_requires_token() {
    let (state, _store) = common::seeded_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/admin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = common::login(&app, "a@x.com", "p").await;

    let req = test::TestRequest::post()
        .uri("/admin")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(json!({ "email": "b@x.com", "password": "q" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 2);
    assert_eq!(created["email"], "b@x.com");

    let req = test::TestRequest::post()
        .uri("/admin")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(json!({ "email": "b@x.com", "password": "other" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "duplicate email");

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let admins: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(admins.len(), 2);

    // The new admin can log in right away.
    common::login(&app, "b@x.com", "q").await;
}
