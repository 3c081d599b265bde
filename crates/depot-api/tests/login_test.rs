mod helpers;

use helpers::setup_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn login_succeeds_with_known_credentials() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/api/login")
        .json(&json!({"username": "student1", "password": "password123"}))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["username"], json!("student1"));
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn each_login_issues_a_fresh_token() {
    let app = setup_test_app();
    let credentials = json!({"username": "teacher1", "password": "password123"});

    let first: Value = app.server.post("/api/login").json(&credentials).await.json();
    let second: Value = app.server.post("/api/login").json(&credentials).await.json();

    assert_ne!(first["token"], second["token"]);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = setup_test_app();

    let wrong_secret = app
        .server
        .post("/api/login")
        .json(&json!({"username": "student1", "password": "wrong"}))
        .await;
    let unknown_user = app
        .server
        .post("/api/login")
        .json(&json!({"username": "nouser", "password": "x"}))
        .await;

    assert_eq!(wrong_secret.status_code(), 401);
    assert_eq!(unknown_user.status_code(), 401);
    // Same body either way: callers cannot probe for valid usernames.
    assert_eq!(wrong_secret.json::<Value>(), unknown_user.json::<Value>());
    assert_eq!(
        wrong_secret.json::<Value>()["message"],
        json!("Invalid credentials")
    );
}

#[tokio::test]
async fn malformed_login_bodies_are_rejected() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/api/login")
        .json(&json!({"username": "student1"}))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
}
