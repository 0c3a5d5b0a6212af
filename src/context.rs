use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{TemplateStore, TicketService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub ticket_service: Arc<dyn TicketService>,
    pub templates: Arc<dyn TemplateStore>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        ticket_service: Arc<dyn TicketService>,
        templates: Arc<dyn TemplateStore>,
    ) -> Self {
        Self {
            config,
            ticket_service,
            templates,
        }
    }
}
