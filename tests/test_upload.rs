mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;

fn video_form(name: &str, mime: &str, bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part("video", Part::bytes(bytes).file_name(name).mime_type(mime))
}

#[tokio::test]
async fn upload_list_delete_video() {
    let env = common::TestEnv::start().await;
    let server = env.admin_server().await;

    let response = server
        .post("/api/videos/upload")
        .multipart(video_form("intro.mp4", "video/mp4", vec![7u8; 1024]))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Video uploaded successfully");
    assert_eq!(body["data"]["originalName"], "intro.mp4");
    assert_eq!(body["data"]["size"], 1024);
    let filename = body["data"]["filename"].as_str().unwrap().to_string();
    assert!(filename.starts_with("video-"));
    assert!(filename.ends_with(".mp4"));
    assert_eq!(
        body["data"]["url"].as_str().unwrap(),
        format!("/uploads/videos/{}", filename)
    );
    assert!(env.upload_dir.path().join("videos").join(&filename).exists());

    // Served statically
    let served = server.get(&format!("/uploads/videos/{}", filename)).await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().len(), 1024);

    // Listed
    let list: Value = server.get("/api/videos/list").await.json();
    let entries = list["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["filename"], filename.as_str());
    assert!(entries[0]["uploadDate"].is_string());

    // Deleted
    let response = server
        .delete(&format!("/api/videos/delete/{}", filename))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Video deleted successfully");

    let response = server
        .delete(&format!("/api/videos/delete/{}", filename))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Video file not found");
}

#[tokio::test]
async fn rejects_disallowed_extension() {
    let env = common::TestEnv::start().await;
    let server = env.admin_server().await;

    let response = server
        .post("/api/videos/upload")
        .multipart(video_form("notes.txt", "text/plain", b"hello".to_vec()))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_missing_file_field() {
    let env = common::TestEnv::start().await;
    let server = env.admin_server().await;

    let form = MultipartForm::new().add_text("title", "no file here");
    let response = server.post("/api/videos/upload").multipart(form).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn image_upload_requires_image_mime() {
    let env = common::TestEnv::start().await;
    let server = env.admin_server().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![1u8; 16])
            .file_name("logo.png")
            .mime_type("application/octet-stream"),
    );
    server
        .post("/api/images/upload")
        .multipart(form)
        .await
        .assert_status_bad_request();

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![1u8; 16]).file_name("logo.png").mime_type("image/png"),
    );
    let response = server.post("/api/images/upload").multipart(form).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["data"]["url"]
        .as_str()
        .unwrap()
        .starts_with("/uploads/images/image-"));
}

#[tokio::test]
async fn oversized_image_is_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.admin_server().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0u8; 11 * 1024 * 1024])
            .file_name("huge.png")
            .mime_type("image/png"),
    );
    let response = server.post("/api/images/upload").multipart(form).await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn uploads_require_session() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    server
        .post("/api/videos/upload")
        .multipart(video_form("intro.mp4", "video/mp4", vec![1u8; 8]))
        .await
        .assert_status_unauthorized();
    server.get("/api/images/list").await.assert_status_unauthorized();
}
