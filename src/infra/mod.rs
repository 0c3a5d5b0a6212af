pub mod templates;
pub mod zendesk;
