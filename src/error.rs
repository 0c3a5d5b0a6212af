use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("template error: {0}")]
    Template(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a single create call against the ticketing service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketServiceError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_http_line() {
        let err = TicketServiceError::Status {
            status: 422,
            body: "{\"error\":\"RecordInvalid\"}".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 422: {\"error\":\"RecordInvalid\"}");
    }

    #[test]
    fn configuration_error_is_bare_message() {
        let err = AppError::Configuration("Missing API credentials".to_string());
        assert_eq!(err.to_string(), "Missing API credentials");
    }
}
