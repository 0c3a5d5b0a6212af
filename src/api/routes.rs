use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::{error::panic_response, handlers};
use crate::context::AppContext;

pub fn create_router(ctx: Arc<AppContext>) -> Router {
    let api_routes = Router::new()
        .route("/create-tickets", post(handlers::create_tickets))
        .route("/ticket-types", get(handlers::ticket_types))
        .with_state(ctx);

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
