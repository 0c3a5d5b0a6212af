use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DEFAULT_SUBDOMAIN: &str = "klaviyo";
pub const DEFAULT_PAYLOAD_DIR: &str = "lib/payloads";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

pub const MISSING_CREDENTIALS: &str = "Missing API credentials in environment variables";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub email: Option<String>,
    pub subdomain: String,
    pub api_base_url: Option<String>,
    pub payload_dir: PathBuf,
    pub bind: SocketAddr,
}

/// Account email plus API token used for Basic authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub api_token: String,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = value("TICKETSIM_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|err| {
            AppError::Configuration(format!("invalid TICKETSIM_BIND '{bind_raw}': {err}"))
        })?;

        Ok(Self {
            api_token: value("ZD_API_KEY"),
            email: value("EMAIL_ADDRESS"),
            subdomain: value("SUBDOMAIN").unwrap_or_else(|| DEFAULT_SUBDOMAIN.to_string()),
            api_base_url: value("TICKETSIM_API_BASE_URL"),
            payload_dir: value("TICKETSIM_PAYLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PAYLOAD_DIR)),
            bind,
        })
    }

    pub fn credentials(&self) -> AppResult<Credentials> {
        match (self.email.as_deref(), self.api_token.as_deref()) {
            (Some(email), Some(api_token)) => Ok(Credentials {
                email: email.to_string(),
                api_token: api_token.to_string(),
            }),
            _ => Err(AppError::Configuration(MISSING_CREDENTIALS.to_string())),
        }
    }
}
