#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::NaiveDate;
use tokio::sync::watch;

use linkbio::api::handlers::health_handler;
use linkbio::api::routes::api_routes;
use linkbio::config::Config;
use linkbio::domain::entities::{Analytics, Link, ProfileSnapshot, User};
use linkbio::domain::store::ProfileStore;
use linkbio::infrastructure::analytics::SyntheticAnalyticsSource;
use linkbio::infrastructure::persistence::InMemoryProfileRepository;
use linkbio::infrastructure::storage::DataUrlImageStorage;
use linkbio::server::{Collaborators, build_state};
use linkbio::state::AppState;
use linkbio::utils::id_generator::SequentialIdGenerator;

/// Upload cap used by every test server.
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024;

pub const TEST_WINDOW_DAYS: u32 = 7;

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        data_file: None,
        upload_dir: None,
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        analytics_window_days: TEST_WINDOW_DAYS,
        analytics_seed: Some(42),
        profile_username: "ada".to_string(),
        profile_email: "ada@example.com".to_string(),
        profile_display_name: "Ada Lovelace".to_string(),
    }
}

pub fn test_user() -> User {
    User::new(
        "u1".to_string(),
        "ada@example.com".to_string(),
        "ada".to_string(),
        "Ada Lovelace".to_string(),
    )
}

/// Three links: "1" Blog (enabled), "2" Shop (disabled), "3" Talks (enabled).
pub fn seeded_snapshot() -> ProfileSnapshot {
    let mut snapshot = ProfileSnapshot::starter(test_user());
    snapshot.links = vec![
        Link::new("1".into(), "Blog".into(), "https://blog.example.com/".into(), true, 0),
        Link::new("2".into(), "Shop".into(), "https://shop.example.com/".into(), false, 1),
        Link::new("3".into(), "Talks".into(), "https://talks.example.com/".into(), true, 2),
    ];
    snapshot
}

pub fn test_analytics() -> Analytics {
    let today = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
    SyntheticAnalyticsSource::seeded(42).generate(TEST_WINDOW_DAYS, today)
}

/// State over in-memory collaborators, starting from `snapshot`.
pub fn create_test_state(
    snapshot: ProfileSnapshot,
) -> (AppState, watch::Receiver<ProfileSnapshot>) {
    let ids = SequentialIdGenerator::starting_after(snapshot.links.iter().map(|l| l.id.as_str()));
    let store = ProfileStore::new(snapshot.clone(), test_analytics(), ids);

    let today = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
    let collaborators = Collaborators {
        repository: Arc::new(InMemoryProfileRepository::with_snapshot(snapshot)),
        images: Arc::new(DataUrlImageStorage::new()),
        analytics: Arc::new(SyntheticAnalyticsSource::seeded(7).ending_on(today)),
    };

    build_state(store, collaborators, &test_config())
}

/// `/health` plus every `/api` route.
pub fn make_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes(TEST_MAX_UPLOAD_BYTES))
        .with_state(state)
}

pub fn make_server(snapshot: ProfileSnapshot) -> (TestServer, watch::Receiver<ProfileSnapshot>) {
    let (state, rx) = create_test_state(snapshot);
    (TestServer::new(make_router(state)).unwrap(), rx)
}
