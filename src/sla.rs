//! SLA Policy
//!
//! Maps a ticket's category and priority to the number of hours it may stay
//! open. Base hours come from the service category, the priority shifts them
//! by half a day, and the result never drops below [`MIN_SLA_HOURS`].

use crate::models::TicketPriority;
use chrono::{DateTime, Duration, Utc};

/// Lower bound for any SLA window
pub const MIN_SLA_HOURS: i64 = 6;

/// Service category used for SLA lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    It,
    Electrical,
    Cleaning,
    /// Anything not in the alias table, including blank input
    Unrecognized,
}

/// Lower-case labels accepted for each category
const CATEGORY_ALIASES: &[(&str, ServiceCategory)] = &[
    ("it", ServiceCategory::It),
    ("electrical", ServiceCategory::Electrical),
    ("электрика", ServiceCategory::Electrical),
    ("cleaning", ServiceCategory::Cleaning),
    ("уборка", ServiceCategory::Cleaning),
];

impl ServiceCategory {
    /// Resolve a free-form category label
    pub fn from_label(label: &str) -> Self {
        let key = label.trim().to_lowercase();
        CATEGORY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, category)| *category)
            .unwrap_or(Self::Unrecognized)
    }

    /// Base SLA hours before the priority adjustment
    pub fn base_hours(self) -> i64 {
        match self {
            Self::It => 24,
            Self::Electrical => 48,
            Self::Cleaning => 36,
            Self::Unrecognized => 36,
        }
    }
}

/// Hours added to (or removed from) the base window
pub fn priority_adjustment(priority: TicketPriority) -> i64 {
    match priority {
        TicketPriority::Low => 12,
        TicketPriority::Medium => 0,
        TicketPriority::High => -12,
    }
}

/// Total SLA hours for a category/priority pair
pub fn due_hours(category: &str, priority: TicketPriority) -> i64 {
    let base = ServiceCategory::from_label(category).base_hours();
    (base + priority_adjustment(priority)).max(MIN_SLA_HOURS)
}

/// Deadline for a ticket created at `created_at`
pub fn compute_due_at(created_at: DateTime<Utc>, category: &str, priority: TicketPriority) -> DateTime<Utc> {
    created_at + Duration::hours(due_hours(category, priority))
}

/// Human readable breakdown, e.g. `IT: base 24h, priority High -12h, due in 12h`
pub fn explain(category: &str, priority: TicketPriority) -> String {
    let base = ServiceCategory::from_label(category).base_hours();
    let adjust = priority_adjustment(priority);
    let hours = due_hours(category, priority);
    format!("{}: base {}h, priority {} {:+}h, due in {}h", category, base, priority, adjust, hours)
}
