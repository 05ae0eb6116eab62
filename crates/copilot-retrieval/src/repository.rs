//! In-memory ticket lookup for embedding the copilot without a ticketing system.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use copilot_core::errors::CopilotResult;
use copilot_core::models::Ticket;
use copilot_core::traits::ITicketRepository;

#[derive(Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<HashMap<String, Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let repository = Self::new();
        for ticket in tickets {
            repository.insert(ticket);
        }
        repository
    }

    /// Insert or replace a ticket by id.
    pub fn insert(&self, ticket: Ticket) {
        self.tickets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ticket.id.clone(), ticket);
    }

    pub fn len(&self) -> usize {
        self.tickets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ITicketRepository for InMemoryTicketRepository {
    fn get_ticket(&self, id: &str) -> CopilotResult<Option<Ticket>> {
        Ok(self
            .tickets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }
}
