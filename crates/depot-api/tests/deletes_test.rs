mod helpers;

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;

fn auth() -> HeaderValue {
    HeaderValue::from_static("session-token")
}

#[tokio::test]
async fn delete_without_token_never_reaches_the_remote_store() {
    let app = setup_test_app();

    let response = app
        .server
        .delete("/api/delete/cloud-storage/uploads/abc_notes.txt")
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(app.remote.total_calls(), 0);
}

#[tokio::test]
async fn slash_structured_ids_are_forwarded_unmodified() {
    let app = setup_test_app();

    // Upload lands the asset under a multi-segment public id.
    let form = MultipartForm::new().add_part("file", Part::bytes(b"hello".to_vec()).file_name("notes.txt"));
    let uploaded: Value = app
        .server
        .post("/api/upload")
        .add_header(AUTHORIZATION, auth())
        .multipart(form)
        .await
        .json();
    let public_id = uploaded["file"]["public_id"].as_str().unwrap();
    assert!(public_id.contains('/'));

    let response = app
        .server
        .delete(&format!("/api/delete/{public_id}"))
        .add_header(AUTHORIZATION, auth())
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));

    // Gone from the listing afterwards.
    let listing: Value = app
        .server
        .get("/api/files")
        .add_header(AUTHORIZATION, auth())
        .await
        .json();
    assert_eq!(listing["count"], json!(0));
}

#[tokio::test]
async fn deleting_a_binary_asset_takes_a_single_probe() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_part("file", Part::bytes(b"hello".to_vec()).file_name("notes.txt"));
    let uploaded: Value = app
        .server
        .post("/api/upload")
        .add_header(AUTHORIZATION, auth())
        .multipart(form)
        .await
        .json();
    let public_id = uploaded["file"]["public_id"].as_str().unwrap();

    app.server
        .delete(&format!("/api/delete/{public_id}"))
        .add_header(AUTHORIZATION, auth())
        .await;

    // Binary is the first partition probed, so one call suffices.
    assert_eq!(app.remote.destroy_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn deleting_a_media_asset_probes_binary_first() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_part("file", Part::bytes(b"png".to_vec()).file_name("photo.png"));
    let uploaded: Value = app
        .server
        .post("/api/upload")
        .add_header(AUTHORIZATION, auth())
        .multipart(form)
        .await
        .json();
    let public_id = uploaded["file"]["public_id"].as_str().unwrap();

    let response = app
        .server
        .delete(&format!("/api/delete/{public_id}"))
        .add_header(AUTHORIZATION, auth())
        .await;

    assert_eq!(response.status_code(), 200);
    // The binary partition misses, the media partition hits: two probes.
    assert_eq!(app.remote.destroy_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn deleting_a_missing_asset_probes_every_partition() {
    let app = setup_test_app();

    let response = app
        .server
        .delete("/api/delete/cloud-storage/uploads/never_existed.txt")
        .add_header(AUTHORIZATION, auth())
        .await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("File not found"));
    assert_eq!(app.remote.destroy_calls.load(Ordering::SeqCst), 3);
}
