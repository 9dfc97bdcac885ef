//! Integration tests for the content endpoints (videos and page copy).
//!
//! Blog multipart forms are covered by the handler's form parser working
//! against the same admin gate; these tests exercise the JSON resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, test_app};

#[tokio::test]
async fn video_crud_round_trip() {
    let app = test_app();
    let admin_token = app.seed_admin("admin@x.com", "pw").await;

    // Create.
    let response = app
        .post_json(
            "/api/youtube",
            &serde_json::json!({
                "title": "Intro to Skill Aid",
                "url": "https://youtube.com/watch?v=abc123",
                "description": "What we do"
            }),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Public listing sees it.
    let listed = body_json(app.get("/api/youtube", None).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Edit.
    let response = app
        .put_json(
            &format!("/api/youtube/{}", id),
            &serde_json::json!({ "title": "Updated title", "url": "", "description": "" }),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Updated title");
    // Blank fields leave the stored values alone.
    assert_eq!(updated["url"], "https://youtube.com/watch?v=abc123");

    // Delete.
    let response = app
        .request("DELETE", &format!("/api/youtube/{}", id), None, Some(&admin_token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(app.get("/api/youtube", None).await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn video_writes_are_admin_gated() {
    let app = test_app();
    let body = serde_json::json!({
        "title": "t",
        "url": "https://youtube.com/watch?v=x",
        "description": ""
    });

    let response = app.post_json("/api/youtube", &body, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let member = body_json(
        app.post_json(
            "/api/auth/register",
            &serde_json::json!({ "email": "m@x.com", "password": "pw" }),
            None,
        )
        .await,
    )
    .await;
    let response = app
        .post_json("/api/youtube", &body, Some(member["token"].as_str().unwrap()))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn page_copy_returns_latest_revision() {
    let app = test_app();
    let admin_token = app.seed_admin("admin@x.com", "pw").await;

    // Nothing written yet: null body, SPA falls back to defaults.
    let empty = body_json(app.get("/api/blogpagecontent", None).await).await;
    assert!(empty.is_null());

    let first = body_json(
        app.post_json(
            "/api/blogpagecontent",
            &serde_json::json!({ "intro": "Welcome to our blog" }),
            Some(&admin_token),
        )
        .await,
    )
    .await;
    let id = first["id"].as_str().unwrap().to_string();

    // Edit the revision; reads now return the updated copy.
    let response = app
        .put_json(
            &format!("/api/blogpagecontent/{}", id),
            &serde_json::json!({ "intro": "Stories from the field" }),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let latest = body_json(app.get("/api/blogpagecontent", None).await).await;
    assert_eq!(latest["intro"], "Stories from the field");
}

#[tokio::test]
async fn missing_video_is_404() {
    let app = test_app();
    let admin_token = app.seed_admin("admin@x.com", "pw").await;

    let response = app
        .put_json(
            "/api/youtube/00000000-0000-0000-0000-000000000000",
            &serde_json::json!({ "title": "x", "url": "y", "description": "" }),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
