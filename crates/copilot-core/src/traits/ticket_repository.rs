use crate::errors::CopilotResult;
use crate::models::Ticket;

/// Read access to the external ticketing system.
pub trait ITicketRepository: Send + Sync {
    /// Returns `Ok(None)` when the ticket does not exist.
    fn get_ticket(&self, id: &str) -> CopilotResult<Option<Ticket>>;
}
