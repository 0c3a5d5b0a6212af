pub mod template_store;
pub mod ticket_service;

pub use template_store::TemplateStore;
pub use ticket_service::TicketService;
