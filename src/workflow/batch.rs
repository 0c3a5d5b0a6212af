use tracing::{info, warn};

use crate::config::Credentials;
use crate::context::AppContext;
use crate::domain::batch::{BatchEntry, BatchReport, BatchRequest};
use crate::domain::ticket::TicketTemplate;
use crate::services::{TemplateStore, TicketService};

pub const MAX_TICKETS_PER_TYPE: i64 = 100;

enum EntryPlan<'a> {
    Skip,
    Reject(String),
    Create {
        template: &'a TicketTemplate,
        count: u32,
    },
}

fn plan_entry<'a>(entry: &BatchEntry, templates: &'a dyn TemplateStore) -> EntryPlan<'a> {
    if entry.count == 0 {
        return EntryPlan::Skip;
    }
    if !(0..=MAX_TICKETS_PER_TYPE).contains(&entry.count) {
        return EntryPlan::Reject(format!(
            "{}: count must be between 0 and {MAX_TICKETS_PER_TYPE}",
            entry.key
        ));
    }
    match entry.ticket_type.and_then(|id| templates.resolve(id)) {
        Some(template) => EntryPlan::Create {
            template,
            count: entry.count as u32,
        },
        None => EntryPlan::Reject(format!("Invalid ticket type: {}", entry.key)),
    }
}

/// Creates every requested ticket, one call at a time, in request order.
///
/// Individual failures are recorded in the report and never stop the run.
pub async fn run_batch(
    ctx: &AppContext,
    request: &BatchRequest,
    credentials: &Credentials,
) -> BatchReport {
    let mut report = BatchReport::new();
    info!(entries = request.entries().len(), "starting ticket batch");

    for entry in request.entries() {
        let (template, count) = match plan_entry(entry, ctx.templates.as_ref()) {
            EntryPlan::Skip => continue,
            EntryPlan::Reject(message) => {
                warn!(ticket_type = %entry.key, count = entry.count, "{message}");
                report.record_rejection(message, entry.count);
                continue;
            }
            EntryPlan::Create { template, count } => (template, count),
        };

        report.open_type(&entry.key);
        for attempt in 1..=count {
            match ctx
                .ticket_service
                .create_ticket(template, credentials)
                .await
            {
                Ok(ticket) => report.record_created(&entry.key, ticket),
                Err(err) => {
                    warn!(ticket_type = %entry.key, attempt, "ticket creation failed: {err}");
                    report.record_attempt_failure(&entry.key, attempt, err);
                }
            }
        }
    }

    info!(
        success = report.success,
        failed = report.failed,
        "ticket batch finished"
    );
    report
}
