pub mod batch;
pub mod ticket;
pub mod ticket_type;
