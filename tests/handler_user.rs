mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_get_user() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server.get("/api/user").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["username"], "ada");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["displayName"], "Ada Lovelace");
    assert!(body["avatar"].is_null());
}

#[tokio::test]
async fn test_update_user() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .patch("/api/user")
        .json(&json!({ "username": "ada_l", "email": " ada@analytical.engine " }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["username"], "ada_l");
    assert_eq!(body["email"], "ada@analytical.engine");
    assert_eq!(body["displayName"], "Ada Lovelace");
}

#[tokio::test]
async fn test_update_user_rejects_bad_username() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    for username in ["ab", "has space", "émile"] {
        server
            .patch("/api/user")
            .json(&json!({ "username": username }))
            .await
            .assert_status_bad_request();
    }

    let body = server.get("/api/user").await.json::<Value>();
    assert_eq!(body["username"], "ada");
}

#[tokio::test]
async fn test_update_user_rejects_bad_email() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .patch("/api/user")
        .json(&json!({ "email": "not-an-email" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_update_user_rejects_blank_display_name() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .patch("/api/user")
        .json(&json!({ "displayName": "   " }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_upload_avatar() {
    let (server, mut rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .post("/api/user/avatar")
        .content_type("image/webp")
        .bytes(b"RIFF0000WEBP".to_vec().into())
        .await;

    response.assert_status_ok();
    let reference = response.json::<Value>()["reference"].as_str().unwrap().to_string();
    assert!(reference.starts_with("data:image/webp;base64,"));

    let user = server.get("/api/user").await.json::<Value>();
    assert_eq!(user["avatar"], reference.as_str());

    // No theme override, so the public page shows the avatar.
    let profile = server.get("/api/profile").await.json::<Value>();
    assert_eq!(profile["resolvedProfileImage"], reference.as_str());

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.user.avatar.as_deref(), Some(reference.as_str()));
}

#[tokio::test]
async fn test_upload_avatar_requires_content_type() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .post("/api/user/avatar")
        .bytes(vec![1, 2, 3].into())
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_upload_avatar_rejects_empty_body() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .post("/api/user/avatar")
        .content_type("image/png")
        .bytes(Vec::new().into())
        .await
        .assert_status_bad_request();
}
