//! Email Notification Gateway
//!
//! Posts a ticket summary to the external email service. Every failure is
//! folded into a [`NotificationResult`] with `sent = false`; nothing here
//! returns an error to the caller.

use crate::config::IntakeConfig;
use crate::error::NotifyError;
use crate::models::{NotificationResult, Ticket};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Payload sent to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub email_to: String,
    pub author_name: String,
    pub category: String,
    pub place: String,
    pub description: String,
    pub priority: String,
    pub subject: String,
}

impl NotificationRequest {
    /// Snapshot a stored ticket. A blank `subject` falls back to [`default_subject`].
    pub fn for_ticket(ticket: &Ticket, email_to: impl Into<String>, subject: Option<&str>) -> Self {
        let subject = match subject {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => default_subject(ticket),
        };
        Self {
            email_to: email_to.into(),
            author_name: ticket.author_name.clone(),
            category: ticket.category.clone(),
            place: ticket.place.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority.to_string(),
            subject,
        }
    }
}

/// `New ticket #1a2b3c4d (IT/High)`
pub fn default_subject(ticket: &Ticket) -> String {
    format!("New ticket #{} ({}/{})", ticket.short_id(), ticket.category, ticket.priority)
}

/// Notification gateway trait
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Deliver one notification. Failures come back as `sent = false`.
    async fn send(&self, request: &NotificationRequest) -> NotificationResult;
}

/// HTTP gateway to the email backend
pub struct EmailGateway {
    notify_url: String,
    timeout: Duration,
    client: Client,
}

impl EmailGateway {
    /// Create a gateway posting to `notify_url`. An empty URL is accepted and
    /// makes every send fail immediately.
    pub fn new(notify_url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self {
            notify_url: notify_url.into(),
            timeout,
            client,
        })
    }

    pub fn from_config(config: &IntakeConfig) -> Result<Self, NotifyError> {
        Self::new(config.notify_url.trim(), config.notify_timeout())
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<NotificationResult, NotifyError> {
        if self.notify_url.is_empty() {
            return Err(NotifyError::Unconfigured);
        }

        tracing::debug!("POST {} for {}", self.notify_url, request.email_to);
        let resp = self.client
            .post(&self.notify_url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !resp.status().is_success() {
            return Err(NotifyError::Status(resp.status()));
        }

        let body = resp.bytes().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(|e| NotifyError::Malformed(e.to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> NotifyError {
        if e.is_timeout() {
            NotifyError::Timeout(self.timeout)
        } else {
            NotifyError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl NotificationGateway for EmailGateway {
    async fn send(&self, request: &NotificationRequest) -> NotificationResult {
        match self.deliver(request).await {
            Ok(result) => {
                tracing::info!(sent = result.sent, "Email service answered for {}: {}", request.email_to, result.info);
                result
            }
            Err(e) => {
                tracing::warn!("Email to {} failed: {}", request.email_to, e);
                NotificationResult::failed(format!("email error: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TicketDraft, TicketPriority};
    use chrono::Utc;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_ticket() -> Ticket {
        let draft = TicketDraft {
            author_name: "Ivan".into(),
            category: "IT".into(),
            place: "Room 207".into(),
            description: "Projector broken".into(),
            priority: TicketPriority::High,
        };
        let now = Utc::now();
        Ticket::open(draft, now, now + chrono::Duration::hours(12))
    }

    fn sample_request() -> NotificationRequest {
        NotificationRequest::for_ticket(&sample_ticket(), "a@b.com", None)
    }

    async fn gateway_for(server: &MockServer) -> EmailGateway {
        EmailGateway::new(format!("{}/api/notify/email", server.uri()), Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_default_subject() {
        let ticket = sample_ticket();
        let request = NotificationRequest::for_ticket(&ticket, "a@b.com", Some("   "));
        assert_eq!(request.subject, format!("New ticket #{} (IT/High)", &ticket.id.simple().to_string()[..8]));

        let request = NotificationRequest::for_ticket(&ticket, "a@b.com", Some("Projector"));
        assert_eq!(request.subject, "Projector");
        assert_eq!(request.priority, "High");
    }

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/notify/email"))
            .and(body_partial_json(json!({
                "emailTo": "a@b.com",
                "authorName": "Ivan",
                "place": "Room 207",
                "priority": "High"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sent": true, "info": "queued"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = gateway_for(&server).await.send(&sample_request()).await;
        assert_eq!(result, NotificationResult::sent("queued"));
    }

    #[tokio::test]
    async fn test_remote_refusal_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sent": false, "info": "mailbox full"})))
            .mount(&server)
            .await;

        let result = gateway_for(&server).await.send(&sample_request()).await;
        assert!(!result.sent);
        assert_eq!(result.info, "mailbox full");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let result = gateway_for(&server).await.send(&sample_request()).await;
        assert!(!result.sent);
        assert!(result.info.contains("502"), "{}", result.info);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let result = gateway_for(&server).await.send(&sample_request()).await;
        assert!(!result.sent);
        assert!(result.info.contains("malformed"), "{}", result.info);
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"sent": true, "info": "late"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let gateway = EmailGateway::new(server.uri(), Duration::from_millis(200)).unwrap();
        let result = gateway.send(&sample_request()).await;
        assert!(!result.sent);
        assert!(result.info.contains("timed out"), "{}", result.info);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Port 9 (discard) is not expected to be listening.
        let gateway = EmailGateway::new("http://127.0.0.1:9/api/notify/email", Duration::from_secs(2)).unwrap();
        let result = gateway.send(&sample_request()).await;
        assert!(!result.sent);
        assert!(!result.info.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint() {
        let gateway = EmailGateway::from_config(&IntakeConfig::default()).unwrap();
        let result = gateway.send(&sample_request()).await;
        assert!(!result.sent);
        assert!(result.info.contains("not configured"));
    }
}
