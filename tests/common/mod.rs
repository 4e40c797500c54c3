#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use referly::{config::Config, db::DBClient, routes::create_router, utils::token, AppState};
use sqlx::{Pool, Postgres};
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret";

pub fn test_router(pool: Pool<Postgres>) -> Router {
    let config = Config {
        database_url: String::new(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_maxage: 60,
        port: 0,
    };
    let app_state = AppState {
        env: config,
        db_client: DBClient::new(pool),
    };
    create_router(Arc::new(app_state))
}

pub fn bearer_for(user_id: Uuid) -> String {
    let token = token::create_token(&user_id.to_string(), JWT_SECRET.as_bytes(), 60).unwrap();
    format!("Bearer {}", token)
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn get_authed(
    app: Router,
    uri: &str,
    bearer: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::AUTHORIZATION, bearer)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn get_plain(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub fn register_body(
    username: &str,
    email: &str,
    referral_code: Option<&str>,
) -> serde_json::Value {
    let mut body = serde_json::json!({
        "username": username,
        "email": email,
        "password": "password123",
    });
    if let Some(code) = referral_code {
        body["referral_code"] = code.into();
    }
    body
}

pub async fn register_user(
    app: &Router,
    username: &str,
    email: &str,
    referral_code: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    post_json(
        app.clone(),
        "/api/register",
        register_body(username, email, referral_code),
    )
    .await
}

pub fn user_id_from(body: &serde_json::Value) -> Uuid {
    body["user_id"].as_str().unwrap().parse().unwrap()
}
