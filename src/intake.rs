//! Ticket Intake
//!
//! Normalizes a submission, schedules its SLA deadline, stores it and then
//! tries to notify the requested recipient. Storing always happens first and
//! is never undone; the notification outcome only rides along in the reply.

use crate::models::{CreateAndNotifyRequest, CreateTicketRequest, IntakeOutcome, NotificationResult, Ticket, TicketDraft};
use crate::notify::{NotificationGateway, NotificationRequest};
use crate::sla;
use crate::store::TicketStore;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Intake service
pub struct IntakeService {
    store: Arc<dyn TicketStore>,
    gateway: Arc<dyn NotificationGateway>,
    notify_timeout: Duration,
}

impl IntakeService {
    /// `notify_timeout` bounds each gateway call, whatever the gateway does internally.
    pub fn new(store: Arc<dyn TicketStore>, gateway: Arc<dyn NotificationGateway>, notify_timeout: Duration) -> Self {
        Self { store, gateway, notify_timeout }
    }

    /// Create and store a ticket without notifying anyone
    pub fn create(&self, request: CreateTicketRequest) -> Ticket {
        self.register(request.into_draft())
    }

    /// Create and store a ticket, then email `email_to`
    pub async fn create_and_notify(&self, request: CreateAndNotifyRequest) -> IntakeOutcome {
        let (draft, email_to, subject) = request.into_parts();
        let ticket = self.register(draft);
        let email = self.notify(&ticket, email_to.as_deref(), subject.as_deref()).await;
        IntakeOutcome { ticket, email }
    }

    pub fn get(&self, id: &Uuid) -> Option<Ticket> {
        self.store.get_by_id(id)
    }

    pub fn list(&self) -> Vec<Ticket> {
        self.store.get_all()
    }

    fn register(&self, draft: TicketDraft) -> Ticket {
        let created_at = Utc::now();
        let sla_due_at = sla::compute_due_at(created_at, &draft.category, draft.priority);
        let ticket = self.store.add(Ticket::open(draft, created_at, sla_due_at));

        tracing::info!(
            ticket_id = %ticket.id,
            category = %ticket.category,
            priority = %ticket.priority,
            "Ticket created, SLA due {}",
            ticket.sla_due_at.to_rfc3339()
        );
        ticket
    }

    async fn notify(&self, ticket: &Ticket, email_to: Option<&str>, subject: Option<&str>) -> NotificationResult {
        let email_to = match email_to.map(str::trim) {
            Some(addr) if !addr.is_empty() => addr,
            _ => {
                tracing::warn!("Ticket {} has no recipient, skipping email", ticket.id);
                return NotificationResult::failed("email error: no recipient address supplied");
            }
        };

        let request = NotificationRequest::for_ticket(ticket, email_to, subject);
        match tokio::time::timeout(self.notify_timeout, self.gateway.send(&request)).await {
            Ok(result) => {
                if !result.sent {
                    tracing::warn!("Notification for ticket {} not sent: {}", ticket.id, result.info);
                }
                result
            }
            Err(_) => {
                tracing::warn!("Notification for ticket {} exceeded {:?}", ticket.id, self.notify_timeout);
                NotificationResult::failed(format!("email error: timed out after {:?}", self.notify_timeout))
            }
        }
    }
}
