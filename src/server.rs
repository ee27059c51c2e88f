//! HTTP server initialization and runtime setup.
//!
//! Handles collaborator selection, profile loading, persist worker spawning,
//! and the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use tokio::sync::{RwLock, watch};

use crate::application::services::{AnalyticsService, ProfileService};
use crate::config::Config;
use crate::domain::entities::{Analytics, ProfileSnapshot, User};
use crate::domain::persist_worker::{attach_persistence, persist_channel, run_persist_worker};
use crate::domain::repositories::{AnalyticsSource, ImageStorage, ProfileRepository};
use crate::domain::store::ProfileStore;
use crate::infrastructure::analytics::SyntheticAnalyticsSource;
use crate::infrastructure::persistence::{InMemoryProfileRepository, JsonFileProfileRepository};
use crate::infrastructure::storage::{DataUrlImageStorage, LocalImageStorage};
use crate::routes::{UPLOADS_PREFIX, app_router};
use crate::state::AppState;
use crate::utils::id_generator::{RandomIdGenerator, generate_id};

/// The three external collaborators the dashboard talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub repository: Arc<dyn ProfileRepository>,
    pub images: Arc<dyn ImageStorage>,
    pub analytics: Arc<dyn AnalyticsSource>,
}

impl Collaborators {
    /// Picks implementations based on the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let repository: Arc<dyn ProfileRepository> = match &config.data_file {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                Arc::new(JsonFileProfileRepository::new(path))
            }
            None => Arc::new(InMemoryProfileRepository::new()),
        };

        let images: Arc<dyn ImageStorage> = match &config.upload_dir {
            Some(dir) => Arc::new(LocalImageStorage::new(dir, UPLOADS_PREFIX)),
            None => Arc::new(DataUrlImageStorage::new()),
        };

        let analytics: Arc<dyn AnalyticsSource> = match config.analytics_seed {
            Some(seed) => Arc::new(SyntheticAnalyticsSource::seeded(seed)),
            None => Arc::new(SyntheticAnalyticsSource::new()),
        };

        Ok(Self {
            repository,
            images,
            analytics,
        })
    }
}

/// Wires the store, services and persistence channel into [`AppState`].
///
/// Returns the state together with the receiving end of the persist
/// channel; the caller decides where the worker runs. The current store
/// contents count as already saved.
pub fn build_state(
    mut store: ProfileStore,
    collaborators: Collaborators,
    config: &Config,
) -> (AppState, watch::Receiver<ProfileSnapshot>) {
    let (persist_tx, persist_rx) = persist_channel(store.snapshot());
    attach_persistence(&mut store, persist_tx.clone());

    let store = Arc::new(RwLock::new(store));
    let profile_service = Arc::new(ProfileService::new(
        store,
        collaborators.images.clone(),
        config.max_upload_bytes,
    ));
    let analytics_service = Arc::new(AnalyticsService::new(
        collaborators.analytics,
        config.analytics_window_days,
    ));

    let state = AppState::new(
        profile_service,
        analytics_service,
        collaborators.repository,
        collaborators.images,
        persist_tx,
    );

    (state, persist_rx)
}

/// Loads the saved profile, or starts a fresh one for the configured owner.
///
/// # Errors
///
/// Returns an error if the repository holds an unreadable snapshot.
pub async fn load_snapshot(
    repository: &dyn ProfileRepository,
    config: &Config,
) -> Result<ProfileSnapshot> {
    match repository
        .load()
        .await
        .context("Failed to load profile snapshot")?
    {
        Some(snapshot) => {
            tracing::info!(
                username = %snapshot.user.username,
                links = snapshot.links.len(),
                "Profile loaded"
            );
            Ok(snapshot)
        }
        None => {
            tracing::info!(username = %config.profile_username, "No saved profile, starting fresh");
            Ok(ProfileSnapshot::starter(User::new(
                generate_id(),
                config.profile_email.clone(),
                config.profile_username.clone(),
                config.profile_display_name.clone(),
            )))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Profile repository, image storage and analytics source
/// - Profile store from the saved snapshot
/// - Initial analytics snapshot
/// - Background persist worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The saved profile cannot be read
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let collaborators = Collaborators::from_config(&config).await?;

    let snapshot = load_snapshot(collaborators.repository.as_ref(), &config).await?;

    let analytics = match collaborators
        .analytics
        .fetch(config.analytics_window_days)
        .await
    {
        Ok(analytics) => analytics,
        Err(e) => {
            tracing::warn!("Failed to load analytics: {}. Starting with empty analytics.", e);
            Analytics::default()
        }
    };

    let store = ProfileStore::new(snapshot, analytics, RandomIdGenerator);
    let (state, persist_rx) = build_state(store, collaborators.clone(), &config);

    // Writes the starter profile, so the file exists after the first run.
    let initial = state.profile_service.store().read().await.snapshot();
    if let Err(e) = collaborators.repository.save(&initial).await {
        tracing::warn!("Initial profile save failed: {}", e);
    }

    let worker = tokio::spawn(run_persist_worker(
        persist_rx,
        collaborators.repository.clone(),
    ));
    tracing::info!("Persist worker started");

    let profile_service = state.profile_service.clone();
    let app = app_router(state, config.upload_dir.as_deref());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, flushing profile");

    // The store listener holds a sender clone, so the worker only drains
    // and stops once the store itself is dropped.
    let final_snapshot = profile_service.store().read().await.snapshot();
    drop(profile_service);
    if let Err(e) = worker.await {
        tracing::error!("Persist worker panicked: {}", e);
    }
    collaborators
        .repository
        .save(&final_snapshot)
        .await
        .context("Final profile save failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
