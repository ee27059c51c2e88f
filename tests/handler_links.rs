mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use linkbio::domain::entities::Link;

fn ids(body: &Value) -> Vec<String> {
    body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_in_order() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(ids(&body), vec!["1", "2", "3"]);
    assert_eq!(body["links"][1]["enabled"], false);
    assert_eq!(body["links"][0]["clickCount"], 0);
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_sanitizes_url() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .post("/api/links")
        .json(&json!({ "title": "Docs", "url": "docs.example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["id"], "4");
    assert_eq!(body["url"], "https://docs.example.com/");
    assert_eq!(body["order"], 3);
    assert_eq!(body["enabled"], true);
    assert_eq!(body["clickCount"], 0);
}

#[tokio::test]
async fn test_create_link_disabled() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .post("/api/links")
        .json(&json!({ "title": "Draft", "url": "https://draft.example.com", "enabled": false }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["enabled"], false);
}

#[tokio::test]
async fn test_create_link_rejects_ftp() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .post("/api/links")
        .json(&json!({ "title": "Files", "url": "ftp://files.example.com" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    let list = server.get("/api/links").await.json::<Value>();
    assert_eq!(ids(&list).len(), 3);
}

#[tokio::test]
async fn test_create_link_rejects_empty_title() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .post("/api/links")
        .json(&json!({ "title": "", "url": "https://a.example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_queues_snapshot() {
    let (server, mut rx) = common::make_server(common::seeded_snapshot());

    server
        .post("/api/links")
        .json(&json!({ "title": "Docs", "url": "https://docs.example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.links.len(), 4);
    assert_eq!(snapshot.links[3].title, "Docs");
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_fields() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .patch("/api/links/2")
        .json(&json!({ "title": "Store", "url": "store.example.com", "enabled": true }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], "2");
    assert_eq!(body["title"], "Store");
    assert_eq!(body["url"], "https://store.example.com/");
    assert_eq!(body["enabled"], true);
    assert_eq!(body["order"], 1);
}

#[tokio::test]
async fn test_update_link_partial_keeps_other_fields() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .patch("/api/links/1")
        .json(&json!({ "enabled": false }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Blog");
    assert_eq!(body["url"], "https://blog.example.com/");
    assert_eq!(body["enabled"], false);
}

#[tokio::test]
async fn test_update_link_not_found() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .patch("/api/links/99")
        .json(&json!({ "title": "Ghost" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["details"]["id"], "99");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_keeps_order_values() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .delete("/api/links/2")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body = server.get("/api/links").await.json::<Value>();
    assert_eq!(ids(&body), vec!["1", "3"]);
    assert_eq!(body["links"][1]["order"], 2);
}

#[tokio::test]
async fn test_delete_link_twice() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .delete("/api/links/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Second delete returns 404, the link is already gone.
    server.delete("/api/links/1").await.assert_status_not_found();
}

// ─── Reorder ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reorder_links() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .put("/api/links/order")
        .json(&json!({ "ids": ["3", "1", "2"] }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(ids(&body), vec!["3", "1", "2"]);
    for (index, link) in body["links"].as_array().unwrap().iter().enumerate() {
        assert_eq!(link["order"], index);
    }
}

#[tokio::test]
async fn test_reorder_large_profile() {
    let mut snapshot = common::seeded_snapshot();
    snapshot.links = (0..1200u32)
        .map(|i| {
            let url = format!("https://example.com/{i}");
            Link::new(i.to_string(), format!("Link {i}"), url, true, i)
        })
        .collect();
    let (server, _rx) = common::make_server(snapshot);

    let reversed: Vec<String> = (0..1200u32).rev().map(|i| i.to_string()).collect();
    let response = server
        .put("/api/links/order")
        .json(&json!({ "ids": reversed }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(ids(&body), reversed);
}

#[tokio::test]
async fn test_reorder_rejects_partial_list() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server
        .put("/api/links/order")
        .json(&json!({ "ids": ["3", "1"] }))
        .await;

    response.assert_status_bad_request();

    let body = server.get("/api/links").await.json::<Value>();
    assert_eq!(ids(&body), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_reorder_rejects_duplicates() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .put("/api/links/order")
        .json(&json!({ "ids": ["1", "1", "2"] }))
        .await
        .assert_status_bad_request();
}

// ─── Clicks ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_record_click() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server.post("/api/links/3/click").await.assert_status_ok();
    let response = server.post("/api/links/3/click").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["clickCount"], 2);
}

#[tokio::test]
async fn test_record_click_unknown_link() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server
        .post("/api/links/nope/click")
        .await
        .assert_status_not_found();
}
