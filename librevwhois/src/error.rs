use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No domains found for \"{keyword}\"")]
    NoDomains { keyword: String },
    #[error("Failed to write domain: {0}")]
    Output(#[from] std::io::Error),
}
