//! Ticket endpoints

use axum::{Router, Json, extract::{Path, State}, http::StatusCode};
use axum::routing::get;
use std::sync::Arc;
use uuid::Uuid;
use crate::{ApiState, models::*, sla};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route("/:id", get(get_ticket))
}

/// List tickets, newest first
#[utoipa::path(
    get,
    path = "/api/tickets",
    responses(
        (status = 200, description = "All tickets", body = [Ticket])
    ),
    tag = "tickets"
)]
pub async fn list_tickets(State(state): State<Arc<ApiState>>) -> Json<Vec<Ticket>> {
    Json(state.intake.list())
}

/// Get ticket
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket details", body = Ticket),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ticket>, (StatusCode, Json<ErrorResponse>)> {
    state.intake.get(&id)
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("not_found", format!("ticket {} not found", id))),
            )
        })
}

/// Create ticket without sending a notification
#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = TicketReceipt)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<CreateTicketRequest>,
) -> (StatusCode, Json<TicketReceipt>) {
    let ticket = state.intake.create(input);
    let receipt = TicketReceipt {
        id: ticket.id,
        status: ticket.status,
        created_at: ticket.created_at,
        sla_due_at: ticket.sla_due_at,
        message: sla::explain(&ticket.category, ticket.priority),
    };
    (StatusCode::CREATED, Json(receipt))
}
