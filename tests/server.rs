mod common;

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{rt, App, HttpServer};
use serde_json::{json, Value};

#[actix_rt::test]
async fn test_login_and_guarded_delete_over_http() {
    let (state, store) = common::seeded_state().await;
    common::add_book(&store, 5, "Bloodchild").await;

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to listen")
    .run();
    let handle = server.handle();
    rt::spawn(server);

    let client = reqwest::Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let resp = client
        .delete(format!("{}/books/5", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{}/login", base))
        .json(&json!({ "email": "a@x.com", "password": "p" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.expect("login body");
    let token = body["accessToken"].as_str().expect("accessToken").to_string();

    let resp = client
        .delete(format!("{}/books/5", base))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{}/books/5", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    handle.stop(true).await;
}
