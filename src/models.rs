//! API Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Category applied when the caller omits one
pub const DEFAULT_CATEGORY: &str = "IT";

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self { code: code.to_string(), message: message.into() }
    }
}

// ============ Tickets ============

/// Maintenance ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub author_name: String,
    pub category: String,
    pub place: String,
    pub description: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub sla_due_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Open a new ticket from normalized input. `updated_at` starts equal to `created_at`.
    pub fn open(draft: TicketDraft, created_at: DateTime<Utc>, sla_due_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_name: draft.author_name,
            category: draft.category,
            place: draft.place,
            description: draft.description,
            priority: draft.priority,
            status: TicketStatus::New,
            created_at,
            sla_due_at,
            updated_at: created_at,
        }
    }

    /// Leading characters of the id, used in notification subjects
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    /// Lenient parse used at intake: unknown or missing values become `Medium`
    pub fn from_input(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for TicketPriority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Priority label that matched none of the known levels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority: {0:?}")]
pub struct UnknownPriority(pub String);

/// Ticket status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketStatus {
    #[default]
    New,
    InProgress,
    Resolved,
    Closed,
}

/// Ticket fields after intake defaults have been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub author_name: String,
    pub category: String,
    pub place: String,
    pub description: String,
    pub priority: TicketPriority,
}

impl TicketDraft {
    /// Apply intake defaults: empty text for missing fields, `IT` category, `Medium` priority.
    pub fn normalize(
        author_name: Option<String>,
        category: Option<String>,
        place: Option<String>,
        description: Option<String>,
        priority: Option<&str>,
    ) -> Self {
        Self {
            author_name: author_name.unwrap_or_default(),
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            place: place.unwrap_or_default(),
            description: description.unwrap_or_default(),
            priority: TicketPriority::from_input(priority),
        }
    }
}

/// Ticket creation request (no notification)
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub author_name: Option<String>,
    pub category: Option<String>,
    pub place: Option<String>,
    pub description: Option<String>,
    /// Low | Medium | High
    pub priority: Option<String>,
}

impl CreateTicketRequest {
    pub fn into_draft(self) -> TicketDraft {
        TicketDraft::normalize(
            self.author_name,
            self.category,
            self.place,
            self.description,
            self.priority.as_deref(),
        )
    }
}

/// Ticket creation response with an explanation of the SLA calculation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketReceipt {
    pub id: Uuid,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub sla_due_at: DateTime<Utc>,
    pub message: String,
}

// ============ Platform intake ============

/// Create a ticket and notify a recipient by email
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAndNotifyRequest {
    pub author_name: Option<String>,
    pub category: Option<String>,
    pub place: Option<String>,
    pub description: Option<String>,
    /// Low | Medium | High
    pub priority: Option<String>,
    pub email_to: Option<String>,
    /// Overrides the generated subject line when non-blank
    pub subject: Option<String>,
}

impl CreateAndNotifyRequest {
    /// Split into the ticket part and the notification target
    pub fn into_parts(self) -> (TicketDraft, Option<String>, Option<String>) {
        let draft = TicketDraft::normalize(
            self.author_name,
            self.category,
            self.place,
            self.description,
            self.priority.as_deref(),
        );
        (draft, self.email_to, self.subject)
    }
}

/// Outcome of an email notification attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationResult {
    pub sent: bool,
    pub info: String,
}

impl NotificationResult {
    pub fn sent(info: impl Into<String>) -> Self {
        Self { sent: true, info: info.into() }
    }

    pub fn failed(info: impl Into<String>) -> Self {
        Self { sent: false, info: info.into() }
    }
}

/// Created ticket together with the notification outcome
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IntakeOutcome {
    pub ticket: Ticket,
    pub email: NotificationResult,
}
