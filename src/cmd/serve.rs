use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: AppContext) -> AppResult<()> {
    if ctx.config.credentials().is_err() {
        warn!("API credentials not configured; ticket creation requests will fail");
    }

    let addr = ctx.config.bind;
    let router = create_router(Arc::new(ctx));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
