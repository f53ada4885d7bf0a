//! Liveness and remote configuration status.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mailsort_remote::RemoteStatus;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/remote/status", get(remote_status))
}

/// GET /health — process status and whether the remote model is active.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "ai_enabled": state.remote_active(),
        "provider": state.classifier.provider(),
    }))
}

/// GET /remote/status — remote configuration without secrets.
async fn remote_status(State(state): State<Arc<AppState>>) -> Json<RemoteStatus> {
    Json(state.remote.to_status())
}
