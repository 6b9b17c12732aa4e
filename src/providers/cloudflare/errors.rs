// 3rd party crates
use thiserror::Error;

/// Custom error type for Cloudflare operations.
#[derive(Debug, Error)]
pub enum CloudflareError {
    #[error("Invalid API token for zone '{0}'")]
    InvalidApiToken(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Failed to create DNS record '{name}' in zone '{zone}': {message}")]
    CreateFailed {
        zone: String,
        name: String,
        message: String,
    },

    #[error("Failed to list DNS records named '{name}' in zone '{zone}': {message}")]
    ListFailed {
        zone: String,
        name: String,
        message: String,
    },

    #[error("Failed to delete DNS record '{record_id}' in zone '{zone}': {message}")]
    DeleteFailed {
        zone: String,
        record_id: String,
        message: String,
    },
}
