mod helpers;

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, TestApp, UPLOAD_PREFIX};
use serde_json::{json, Value};

fn auth() -> HeaderValue {
    HeaderValue::from_static("Bearer test-token")
}

async fn upload(app: &TestApp, filename: &str, bytes: Vec<u8>) -> axum_test::TestResponse {
    let form = MultipartForm::new().add_part("file", Part::bytes(bytes).file_name(filename));
    app.server
        .post("/api/upload")
        .add_header(AUTHORIZATION, auth())
        .multipart(form)
        .await
}

#[tokio::test]
async fn upload_without_token_never_reaches_the_remote_store() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_part("file", Part::bytes(b"x".to_vec()).file_name("a.png"));
    let response = app.server.post("/api/upload").multipart(form).await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("No token"));
    assert_eq!(app.remote.total_calls(), 0);
}

#[tokio::test]
async fn list_without_token_never_reaches_the_remote_store() {
    let app = setup_test_app();

    let response = app.server.get("/api/files").await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(app.remote.total_calls(), 0);
}

#[tokio::test]
async fn uploaded_files_come_back_from_listing() {
    let app = setup_test_app();

    let response = upload(&app, "photo.png", b"not-a-real-png".to_vec()).await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert!(body["file"]["filename"]
        .as_str()
        .unwrap()
        .ends_with("_photo.png"));
    assert_eq!(body["file"]["resource_type"], json!("image"));
    assert_eq!(body["file"]["size"], json!(14));
    let public_id = body["file"]["public_id"].as_str().unwrap().to_string();
    assert!(public_id.starts_with(UPLOAD_PREFIX));

    let listing = app
        .server
        .get("/api/files")
        .add_header(AUTHORIZATION, auth())
        .await;
    assert_eq!(listing.status_code(), 200);
    let listing: Value = listing.json();
    assert_eq!(listing["count"], json!(1));
    assert_eq!(listing["files"][0]["public_id"], json!(public_id));
}

#[tokio::test]
async fn documents_are_stored_as_binary() {
    let app = setup_test_app();

    let response = upload(&app, "notes.txt", b"hello".to_vec()).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["file"]["resource_type"], json!("raw"));
    assert_eq!(body["file"]["format"], json!("txt"));
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_text("note", "no file here");
    let response = app
        .server
        .post("/api/upload")
        .add_header(AUTHORIZATION, auth())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["message"], json!("No file provided"));
    assert_eq!(app.remote.total_calls(), 0);
}

#[tokio::test]
async fn upload_with_empty_filename_is_rejected() {
    let app = setup_test_app();

    let response = upload(&app, "", b"x".to_vec()).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["message"], json!("No file selected"));
    assert_eq!(app.remote.total_calls(), 0);
}

#[tokio::test]
async fn disallowed_types_are_rejected_before_any_remote_call() {
    let app = setup_test_app();

    let response = upload(&app, "script.exe", b"MZ".to_vec()).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>()["message"],
        json!("File type not allowed")
    );
    assert_eq!(app.remote.total_calls(), 0);
}

#[tokio::test]
async fn oversized_files_are_rejected_before_any_remote_call() {
    let app = setup_test_app();

    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];
    let response = upload(&app, "big.txt", oversized).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>()["message"],
        json!("File too large (max 10MB)")
    );
    assert_eq!(app.remote.total_calls(), 0);
}
