#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use innovation::innovation_auth::issue_token;
use innovation::innovation_config::JwtConfig;
use innovation::innovation_db::{InMemoryUserRepository, ProductRepository, UserRepository};
use innovation::innovation_models::{NewUser, User, UserRole};
use innovation::router::init_router;
use innovation::state::AppState;
use serde_json::{Map, Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

/// In-memory state; swap repositories on the returned value as needed.
pub fn test_state() -> AppState {
    AppState::in_memory(test_jwt_config())
}

pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    (init_router(state.clone()), state)
}

pub fn setup_test_app_with_users(users: Arc<dyn UserRepository>) -> (Router, AppState) {
    let mut state = test_state();
    state.users = users;
    (init_router(state.clone()), state)
}

pub fn setup_test_app_with_products(products: Arc<dyn ProductRepository>) -> (Router, AppState) {
    let mut state = test_state();
    state.products = products;
    (init_router(state.clone()), state)
}

pub fn token_with_claims(claims: Value) -> String {
    let payload: Map<String, Value> = claims.as_object().cloned().unwrap();
    issue_token(payload, &test_jwt_config()).unwrap()
}

pub fn token_for(email: &str) -> String {
    token_with_claims(json!({ "email": email }))
}

pub async fn seed_user(state: &AppState, email: &str, role: Option<&str>) -> User {
    state
        .users
        .create_user(NewUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Test User".to_string(),
            role: role.map(UserRole::from),
        })
        .await
        .unwrap()
        .unwrap()
}

pub fn seeded_users(users: &[(&str, Option<&str>)]) -> InMemoryUserRepository {
    InMemoryUserRepository::with_users(
        users
            .iter()
            .map(|(email, role)| User {
                id: Uuid::new_v4(),
                email: email.to_string(),
                name: "Test User".to_string(),
                role: role.map(UserRole::from),
            })
            .collect(),
    )
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    (status, body)
}
