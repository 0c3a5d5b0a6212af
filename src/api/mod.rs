//! Inbound HTTP surface for the batch ticket creator.

mod error;
mod handlers;
mod routes;

pub use routes::create_router;
