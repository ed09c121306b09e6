//! FixIt Ticket Intake API
//!
//! Registers maintenance tickets, schedules their SLA deadline and notifies
//! a recipient through an external email service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          FIXIT INTAKE API                           │
//! │                                                                     │
//! │  POST /api/platform/tickets       POST|GET /api/tickets             │
//! │               │                            │                        │
//! │  ┌────────────▼────────────────────────────▼────────────────────┐   │
//! │  │                      INTAKE SERVICE                           │   │
//! │  │   normalize -> SLA policy -> store -> notify (bounded)        │   │
//! │  └──────┬──────────────────────┬─────────────────────┬──────────┘   │
//! │         │                      │                     │              │
//! │  ┌──────▼──────┐     ┌─────────▼────────┐   ┌────────▼─────────┐    │
//! │  │ SLA Policy  │     │  Ticket Store    │   │  Email Gateway   │    │
//! │  │ category +  │     │  in-memory,      │   │  POST JSON,      │    │
//! │  │ priority    │     │  RwLock          │   │  never errors    │    │
//! │  └─────────────┘     └──────────────────┘   └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod notify;
pub mod routes;
pub mod sla;
pub mod store;

use axum::{Json, Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::IntakeConfig;
pub use error::{ConfigError, NotifyError};
pub use intake::IntakeService;
pub use models::*;
pub use notify::{EmailGateway, NotificationGateway, NotificationRequest};
pub use store::{InMemoryTicketStore, TicketStore};

/// API state
pub struct ApiState {
    /// API version
    pub version: String,
    /// Intake pipeline
    pub intake: IntakeService,
    /// Whether an email endpoint was configured at startup
    pub notifications_configured: bool,
}

impl ApiState {
    /// Wire the in-memory store and HTTP email gateway from configuration
    pub fn from_config(config: &IntakeConfig) -> Result<Self, NotifyError> {
        let store = Arc::new(InMemoryTicketStore::new());
        let gateway = Arc::new(EmailGateway::from_config(config)?);
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").into(),
            intake: IntakeService::new(store, gateway, config.notify_timeout()),
            notifications_configured: config.notify_configured(),
        })
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FixIt Intake API",
        version = "1.0.0",
        description = "Maintenance ticket intake with SLA scheduling and email notification"
    ),
    paths(
        routes::health::health_check,
        routes::tickets::list_tickets,
        routes::tickets::get_ticket,
        routes::tickets::create_ticket,
        routes::platform::create_and_notify,
    ),
    components(
        schemas(
            ErrorResponse,
            Ticket, TicketPriority, TicketStatus,
            CreateTicketRequest, TicketReceipt,
            CreateAndNotifyRequest, NotificationResult, IntakeOutcome,
            routes::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tickets", description = "Ticket registry"),
        (name = "platform", description = "Ticket intake with notification")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .nest("/tickets", routes::tickets::router())
        .nest("/platform", routes::platform::router())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
