use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use serde_json::{Value, json};

use super::error::ApiError;
use crate::context::AppContext;
use crate::domain::batch::{BatchReport, BatchRequest};
use crate::domain::ticket_type::TicketTypeId;
use crate::services::TemplateStore;
use crate::workflow::batch::run_batch;

#[derive(Debug, Serialize)]
pub struct TicketTypeInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub available: bool,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Credentials are checked before the body is looked at.
pub async fn create_tickets(
    State(ctx): State<Arc<AppContext>>,
    body: Bytes,
) -> Result<Json<BatchReport>, ApiError> {
    let credentials = ctx.config.credentials()?;
    let request = BatchRequest::from_json(&body)?;
    let report = run_batch(&ctx, &request, &credentials).await;
    Ok(Json(report))
}

pub async fn ticket_types(State(ctx): State<Arc<AppContext>>) -> Json<Vec<TicketTypeInfo>> {
    let types = TicketTypeId::ALL
        .into_iter()
        .map(|id| TicketTypeInfo {
            id: id.as_str(),
            label: id.label(),
            available: ctx.templates.resolve(id).is_some(),
        })
        .collect();
    Json(types)
}
