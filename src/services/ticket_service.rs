use async_trait::async_trait;

use crate::config::Credentials;
use crate::domain::ticket::{CreatedTicket, TicketTemplate};
use crate::error::TicketServiceError;

#[async_trait]
pub trait TicketService: Send + Sync {
    /// Issues exactly one create call for `template`.
    async fn create_ticket(
        &self,
        template: &TicketTemplate,
        credentials: &Credentials,
    ) -> Result<CreatedTicket, TicketServiceError>;
}
