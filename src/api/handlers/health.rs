//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Persistence**: Profile repository is reachable
/// 2. **Persist Worker**: the snapshot channel still has a receiver
/// 3. **Image Storage**: Upload target is writable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "persistence": { "status": "ok", "message": "Profile repository reachable" },
///     "persist_queue": { "status": "ok", "message": "Persist worker listening" },
///     "image_storage": { "status": "ok", "message": "Image storage writable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let persistence = check_persistence(&state).await;
    let persist_queue = check_persist_queue(&state);
    let image_storage = check_image_storage(&state).await;

    let all_healthy = persistence.is_ok() && persist_queue.is_ok() && image_storage.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            persistence,
            persist_queue,
            image_storage,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_persistence(state: &AppState) -> CheckStatus {
    if state.profile_repository.health_check().await {
        CheckStatus::ok("Profile repository reachable")
    } else {
        CheckStatus::error("Profile repository unavailable")
    }
}

/// Checks that the persist worker is still receiving snapshots.
fn check_persist_queue(state: &AppState) -> CheckStatus {
    if state.persist_sender.is_closed() {
        CheckStatus::error("Persist worker is not running")
    } else {
        CheckStatus::ok("Persist worker listening")
    }
}

async fn check_image_storage(state: &AppState) -> CheckStatus {
    if state.image_storage.health_check().await {
        CheckStatus::ok("Image storage writable")
    } else {
        CheckStatus::error("Image storage unavailable")
    }
}
