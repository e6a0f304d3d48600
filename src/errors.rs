use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Structured error types for the weather server.
#[derive(Error, Debug)]
pub enum AppError {
    /// Startup-only, fatal. Never reaches an HTTP response in practice.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid request body: {0}")]
    RequestDecode(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("unexpected weather payload shape: {0}")]
    PayloadShape(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the failure originated at the upstream provider rather than
    /// in this process or the inbound request.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_) | AppError::UpstreamStatus { .. } | AppError::PayloadShape(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        // Failure bodies are short plain-text strings, not structured JSON.
        let (status, body) = if self.is_upstream() {
            (StatusCode::BAD_GATEWAY, "Weather API error")
        } else {
            match self {
                AppError::RequestDecode(_) => (
                    StatusCode::BAD_REQUEST,
                    "Invalid request format. Check json format is an array of strings.",
                ),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_classification() {
        assert!(AppError::UpstreamStatus { status: 500 }.is_upstream());
        assert!(AppError::PayloadShape("missing main".to_string()).is_upstream());
        assert!(!AppError::RequestDecode("not an array".to_string()).is_upstream());
        assert!(!AppError::Config("bad file".to_string()).is_upstream());
    }

    #[test]
    fn upstream_status_carries_code_in_message() {
        let err = AppError::UpstreamStatus { status: 503 };
        assert_eq!(err.to_string(), "weather provider returned status 503");
    }
}
