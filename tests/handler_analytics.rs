mod common;

use linkbio::application::services::analytics_service::summarize;
use serde_json::Value;

#[tokio::test]
async fn test_analytics_summary() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let response = server.get("/api/analytics").await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    let expected = summarize(
        &common::test_analytics(),
        &common::seeded_snapshot().links,
    );
    assert_eq!(body["totalViews"], expected.total_views);
    assert_eq!(body["totalClicks"], expected.total_clicks);
    assert_eq!(body["clickThroughRate"], expected.click_through_rate.as_str());
    assert_eq!(body["daily"].as_array().unwrap().len(), common::TEST_WINDOW_DAYS as usize);
    assert_eq!(body["daily"][6]["date"], "2026-10-01");
}

#[tokio::test]
async fn test_daily_totals_match_series() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    let body = server.get("/api/analytics").await.json::<Value>();

    let daily = body["daily"].as_array().unwrap();
    let views: u64 = daily.iter().map(|d| d["views"].as_u64().unwrap()).sum();
    let clicks: u64 = daily.iter().map(|d| d["clicks"].as_u64().unwrap()).sum();
    assert_eq!(body["totalViews"], views);
    assert_eq!(body["totalClicks"], clicks);
}

#[tokio::test]
async fn test_top_links_follow_clicks() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    for _ in 0..3 {
        server.post("/api/links/3/click").await.assert_status_ok();
    }
    server.post("/api/links/2/click").await.assert_status_ok();

    let body = server.get("/api/analytics").await.json::<Value>();

    let top: Vec<&str> = body["topLinks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(top, vec!["3", "2", "1"]);
}

#[tokio::test]
async fn test_refresh_replaces_snapshot() {
    let (server, mut rx) = common::make_server(common::seeded_snapshot());

    let before = server.get("/api/analytics").await.json::<Value>();
    let response = server.post("/api/analytics/refresh").await;

    response.assert_status_ok();
    let after = response.json::<Value>();
    assert_eq!(after["daily"].as_array().unwrap().len(), common::TEST_WINDOW_DAYS as usize);
    assert_eq!(after["daily"][6]["date"], "2026-10-01");
    assert_ne!(after["daily"], before["daily"]);

    // Analytics are not part of the persisted profile.
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn test_links_survive_refresh() {
    let (server, _rx) = common::make_server(common::seeded_snapshot());

    server.post("/api/links/1/click").await.assert_status_ok();
    server.post("/api/analytics/refresh").await.assert_status_ok();

    let links = server.get("/api/links").await.json::<Value>();
    assert_eq!(links["links"][0]["clickCount"], 1);
}
