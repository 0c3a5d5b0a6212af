use clap::Args;

use crate::context::AppContext;
use crate::domain::batch::{BatchReport, BatchRequest};
use crate::error::{AppError, AppResult};
use crate::workflow::batch::run_batch;

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Tickets to create, as TYPE=COUNT. Repeat for several types.
    #[arg(short, long = "count", value_name = "TYPE=COUNT", required = true)]
    pub counts: Vec<String>,
}

pub async fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<BatchReport> {
    let credentials = ctx.config.credentials()?;
    let request = parse_counts(&args.counts)?;
    Ok(run_batch(ctx, &request, &credentials).await)
}

fn parse_counts(raw: &[String]) -> AppResult<BatchRequest> {
    let mut counts = Vec::with_capacity(raw.len());
    for item in raw {
        let (key, value) = item.split_once('=').ok_or_else(|| {
            AppError::InvalidRequest(format!("expected TYPE=COUNT, got '{item}'"))
        })?;
        let count = value.trim().parse::<i64>().map_err(|_| {
            AppError::InvalidRequest(format!("count for '{}' must be an integer", key.trim()))
        })?;
        counts.push((key.trim().to_string(), count));
    }
    Ok(BatchRequest::from_counts(counts))
}
