//! Background persistence of store snapshots.
//!
//! The store is synchronous and must never wait on I/O, so saving happens in
//! a separate task fed through a `watch` channel that only ever holds the
//! newest snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::ProfileSnapshot;
use crate::domain::repositories::ProfileRepository;
use crate::domain::store::ProfileStore;

const MAX_SAVE_RETRIES: usize = 3;

/// Sending half of the persistence channel, shared by the store listener
/// and the health check.
pub type PersistSender = Arc<watch::Sender<ProfileSnapshot>>;

/// Creates the persistence channel, holding `initial` as already saved.
pub fn persist_channel(
    initial: ProfileSnapshot,
) -> (PersistSender, watch::Receiver<ProfileSnapshot>) {
    let (tx, rx) = watch::channel(initial);
    (Arc::new(tx), rx)
}

/// Registers a listener that publishes a snapshot after every change to the
/// persisted part of the store.
///
/// Publishing never blocks. The channel holds only the latest snapshot, so a
/// change made while a save is in flight replaces any unsaved older one.
pub fn attach_persistence(store: &mut ProfileStore, tx: PersistSender) {
    store.subscribe(move |event, store| {
        if !event.affects_snapshot() {
            return;
        }
        tx.send_replace(store.snapshot());
        metrics::counter!("persist_snapshots_published_total").increment(1);
        if tx.is_closed() {
            tracing::error!(
                operation = event.operation(),
                "Persist worker stopped, snapshot not saved"
            );
        }
    });
}

/// Saves published snapshots until every sender is dropped.
///
/// Snapshots published while a save is in flight are coalesced: only the
/// newest one is written. Each save is retried with exponential backoff.
pub async fn run_persist_worker<R>(mut rx: watch::Receiver<ProfileSnapshot>, repository: Arc<R>)
where
    R: ProfileRepository + ?Sized,
{
    tracing::info!("Persist worker started");

    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        save_with_retry(repository.as_ref(), &snapshot).await;
    }

    // Published right before the last sender was dropped.
    let pending = {
        let latest = rx.borrow();
        latest.has_changed().then(|| latest.clone())
    };
    if let Some(snapshot) = pending {
        save_with_retry(repository.as_ref(), &snapshot).await;
    }

    tracing::info!("Persist worker stopped");
}

async fn save_with_retry<R>(repository: &R, snapshot: &ProfileSnapshot)
where
    R: ProfileRepository + ?Sized,
{
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(2))
        .map(jitter)
        .take(MAX_SAVE_RETRIES);

    let result = Retry::spawn(strategy, || async {
        repository.save(snapshot).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Saving profile snapshot failed, retrying");
        })
    })
    .await;

    match result {
        Ok(()) => {
            metrics::counter!("persist_snapshots_saved_total").increment(1);
            tracing::debug!(links = snapshot.links.len(), "Profile snapshot saved");
        }
        Err(e) => {
            metrics::counter!("persist_snapshots_failed_total").increment(1);
            tracing::error!(error = %e, "Giving up on profile snapshot");
        }
    }
}
