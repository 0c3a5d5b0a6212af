pub mod config;
pub mod create;
pub mod serve;
pub mod types;
