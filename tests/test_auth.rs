mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn login_success_returns_token_and_sets_cookie() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "username": common::ADMIN_USERNAME,
            "password": common::ADMIN_PASSWORD
        }))
        .await;

    response.assert_status_ok();
    let cookie = response.cookie("cms_session");
    assert!(cookie.http_only().unwrap_or(false));
    assert!(!cookie.secure().unwrap_or(false));

    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["username"], common::ADMIN_USERNAME);
    assert_eq!(body["data"]["token"].as_str(), Some(cookie.value()));
    assert!(body["data"]["expiresAt"].is_string());
}

#[tokio::test]
async fn login_invalid_credentials() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "username": common::ADMIN_USERNAME,
            "password": "wrongpassword"
        }))
        .await;

    response.assert_status_unauthorized();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn login_missing_fields() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server.post("/api/auth/login").json(&json!({})).await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn verify_with_cookie() {
    let env = common::TestEnv::start().await;
    let server = env.server();
    common::login(&server).await;

    let response = server.get("/api/auth/verify").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["valid"], true);
    assert_eq!(body["user"]["username"], common::ADMIN_USERNAME);
}

#[tokio::test]
async fn verify_without_session() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server.get("/api/auth/verify").await;
    response.assert_status_unauthorized();
    let body: Value = response.json();
    assert_eq!(body, json!({ "valid": false }));
}

#[tokio::test]
async fn bearer_token_authorizes_admin_routes() {
    let env = common::TestEnv::start().await;
    let login_server = env.server();
    let body = common::login(&login_server).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // A fresh server without the saved cookie
    let server = env.server_permissive();
    server.get("/api/services-content").await.assert_status_unauthorized();

    let response = server
        .get("/api/services-content")
        .authorization_bearer(token)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn logout_destroys_session() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();
    let body = common::login(&server).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let response = server.post("/api/auth/logout").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Logged out successfully");

    // The server-side session is gone, even for a client that kept the token.
    server
        .get("/api/auth/verify")
        .authorization_bearer(token)
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn logout_without_session_succeeds() {
    let env = common::TestEnv::start().await;
    let server = env.server();
    server.post("/api/auth/logout").await.assert_status_ok();
}
