use crate::domain::ticket::TicketTemplate;
use crate::domain::ticket_type::TicketTypeId;

/// Read-only lookup from ticket type to its payload template.
pub trait TemplateStore: Send + Sync {
    /// `None` means no usable template exists for the type.
    fn resolve(&self, ticket_type: TicketTypeId) -> Option<&TicketTemplate>;
}
