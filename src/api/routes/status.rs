// Certificate Status Route

use crate::api::{models::error::ApiError, state::AppState};
use crate::certificates::locate;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Report the expiry status of every certificate matching the watch pattern.
///
/// Answers any method on any path. The body is a JSON array of records in
/// no particular order; files that fail to load are left out.
pub async fn certificate_status(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let pattern = state.config.watch.clone();
    debug!("Locating certificates matching {}", pattern);

    // Directory traversal blocks
    let paths = tokio::task::spawn_blocking(move || locate(&pattern)).await??;

    let result = state.coordinator.scan(paths).await;
    let body = serde_json::to_vec(&result.records)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
