use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} for url: {url}")]
    Status { status: StatusCode, url: String },

    #[error("Login failed (HTTP {status}): {body}")]
    UnexpectedLoginStatus { status: StatusCode, body: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token not found in login response")]
    MissingToken,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Transcript write failed: {0}")]
    Io(#[from] std::io::Error),
}
