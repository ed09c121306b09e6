//! Health check endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use crate::ApiState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    /// Tickets held in memory
    pub ticket_count: usize,
    /// `false` when no email endpoint is set; intake still works
    pub notifications_configured: bool,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: state.version.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        ticket_count: state.intake.list().len(),
        notifications_configured: state.notifications_configured,
    })
}
