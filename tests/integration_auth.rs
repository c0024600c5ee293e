mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{request, send, setup_test_app, test_jwt_config, token_for, TEST_SECRET};
use innovation::innovation_auth::{TokenError, issue_token, verify_token};
use innovation::innovation_config::{JwtConfig, TOKEN_EXPIRY_SECS};
use innovation::router::LIVENESS_MESSAGE;
use serde_json::{Map, Value, json};

#[tokio::test]
async fn test_liveness() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, request("GET", "/", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, LIVENESS_MESSAGE);
}

#[tokio::test]
async fn test_issue_token_round_trip() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        request("POST", "/jwt", None, Some(json!({ "email": "a@x.com", "plan": "pro" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &test_jwt_config()).unwrap();
    assert_eq!(claims.email(), Some("a@x.com"));
    assert_eq!(claims.extra.get("plan"), Some(&json!("pro")));
    assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_SECS);
}

#[tokio::test]
async fn test_issue_token_overrides_caller_expiry() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        request("POST", "/jwt", None, Some(json!({ "email": "a@x.com", "exp": 1 }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let claims = verify_token(body["token"].as_str().unwrap(), &test_jwt_config()).unwrap();
    assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_SECS);
}

#[tokio::test]
async fn test_issue_token_rejects_non_object_body() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, request("POST", "/jwt", None, Some(json!(["a@x.com"])))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_expired_token_fails_verification() {
    let expired_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: -3600,
    };
    let payload: Map<String, Value> = json!({ "email": "a@x.com" }).as_object().cloned().unwrap();
    let token = issue_token(payload, &expired_config).unwrap();

    assert_eq!(
        verify_token(&token, &test_jwt_config()).unwrap_err(),
        TokenError::ExpiredToken
    );
}

async fn assert_unauthorized(authorization: Option<&str>) {
    let (app, _) = setup_test_app();

    let mut builder = Request::builder().method("DELETE").uri(format!(
        "/users/{}",
        uuid::Uuid::new_v4()
    ));
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }

    let (status, body) = send(&app, builder.body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": true, "message": "unauthorized access" }));
}

#[tokio::test]
async fn test_protected_route_without_header() {
    assert_unauthorized(None).await;
}

#[tokio::test]
async fn test_protected_route_with_header_missing_token() {
    assert_unauthorized(Some("Bearer")).await;
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    assert_unauthorized(Some("Bearer not-a-jwt")).await;
}

#[tokio::test]
async fn test_protected_route_with_forged_token() {
    let payload: Map<String, Value> = json!({ "email": "a@x.com" }).as_object().cloned().unwrap();
    let forged = issue_token(payload, &JwtConfig::new("someone-else")).unwrap();

    assert_unauthorized(Some(&format!("Bearer {}", forged))).await;
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let expired_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: -3600,
    };
    let payload: Map<String, Value> = json!({ "email": "a@x.com" }).as_object().cloned().unwrap();
    let token = issue_token(payload, &expired_config).unwrap();

    assert_unauthorized(Some(&format!("Bearer {}", token))).await;
}

#[tokio::test]
async fn test_scheme_word_is_not_checked() {
    let (app, _) = setup_test_app();
    let token = token_for("a@x.com");

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/users/{}", uuid::Uuid::new_v4()))
        .header("authorization", format!("Token {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, request("GET", "/api-docs/openapi.json", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/jwt"].is_object());
    assert!(body["paths"]["/products/{id}"].is_object());
}
