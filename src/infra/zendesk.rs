use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Deserialize;
use tracing::debug;

use crate::config::Credentials;
use crate::domain::ticket::{CreatedTicket, TicketTemplate};
use crate::error::TicketServiceError;
use crate::services::TicketService;

pub struct ZendeskClient {
    http: Client,
    subdomain: String,
    base_url: String,
}

impl ZendeskClient {
    pub fn new(subdomain: String, base_url_override: Option<String>) -> Self {
        let base_url = base_url_override
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| Self::default_base_url(&subdomain));
        Self {
            http: Client::new(),
            subdomain,
            base_url,
        }
    }

    fn default_base_url(subdomain: &str) -> String {
        format!("https://{subdomain}.zendesk.com")
    }

    fn auth_header(credentials: &Credentials) -> String {
        let raw = format!("{}/token:{}", credentials.email, credentials.api_token);
        let encoded = BASE64_STANDARD.encode(raw);
        format!("Basic {encoded}")
    }

    fn tickets_endpoint(&self) -> String {
        format!("{}/api/v2/tickets.json", self.base_url)
    }

    fn agent_url(&self, id: u64) -> String {
        format!(
            "{}/agent/tickets/{id}",
            Self::default_base_url(&self.subdomain)
        )
    }
}

#[async_trait]
impl TicketService for ZendeskClient {
    async fn create_ticket(
        &self,
        template: &TicketTemplate,
        credentials: &Credentials,
    ) -> Result<CreatedTicket, TicketServiceError> {
        let response = self
            .http
            .post(self.tickets_endpoint())
            .header(AUTHORIZATION, Self::auth_header(credentials))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(template)
            .send()
            .await
            .map_err(|err| TicketServiceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(TicketServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CreateTicketResponse = response
            .json()
            .await
            .map_err(|err| TicketServiceError::Transport(err.to_string()))?;

        debug!(id = payload.ticket.id, "ticket created");

        Ok(CreatedTicket {
            id: payload.ticket.id,
            url: self.agent_url(payload.ticket.id),
            subject: payload.ticket.subject,
        })
    }
}

#[derive(Deserialize)]
struct CreateTicketResponse {
    ticket: CreatedTicketBody,
}

#[derive(Deserialize)]
struct CreatedTicketBody {
    id: u64,
    subject: String,
}
