//! Platform intake endpoint: create a ticket and email a recipient in one call

use axum::{Router, Json, extract::State, http::{header, StatusCode}, response::IntoResponse};
use axum::routing::post;
use std::sync::Arc;
use crate::{ApiState, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/tickets", post(create_and_notify))
}

/// Create ticket and notify
///
/// Always answers 201 once the ticket is stored. `email.sent` reports
/// whether the notification went out.
#[utoipa::path(
    post,
    path = "/api/platform/tickets",
    request_body = CreateAndNotifyRequest,
    responses(
        (status = 201, description = "Ticket created; see `email` for delivery outcome", body = IntakeOutcome)
    ),
    tag = "platform"
)]
pub async fn create_and_notify(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<CreateAndNotifyRequest>,
) -> impl IntoResponse {
    let outcome = state.intake.create_and_notify(input).await;
    let location = format!("/api/tickets/{}", outcome.ticket.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(outcome))
}
