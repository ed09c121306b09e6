//! Ticket Store - persistence abstraction for tickets
//!
//! The in-memory implementation keeps tickets for the lifetime of the
//! process. Listing order is applied on read; the map itself is unordered.

use crate::models::Ticket;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Ticket store trait
pub trait TicketStore: Send + Sync {
    /// Insert a ticket under its id
    fn add(&self, ticket: Ticket) -> Ticket;

    /// Get ticket by id, `None` when absent
    fn get_by_id(&self, id: &Uuid) -> Option<Ticket>;

    /// All tickets, most recently created first
    fn get_all(&self) -> Vec<Ticket>;
}

/// In-memory ticket store
pub struct InMemoryTicketStore {
    tickets: RwLock<HashMap<Uuid, Ticket>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self {
            tickets: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.read().is_empty()
    }
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore for InMemoryTicketStore {
    fn add(&self, ticket: Ticket) -> Ticket {
        self.tickets.write().insert(ticket.id, ticket.clone());
        ticket
    }

    fn get_by_id(&self, id: &Uuid) -> Option<Ticket> {
        self.tickets.read().get(id).cloned()
    }

    fn get_all(&self) -> Vec<Ticket> {
        let mut tickets: Vec<_> = self.tickets.read().values().cloned().collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets
    }
}
