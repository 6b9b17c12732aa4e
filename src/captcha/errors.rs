// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

/// Failure to obtain a verdict from the captcha service. A verdict of "not
/// verified" is not an error; it is `Ok(false)` on the verifier.
#[derive(Debug, Error)]
pub enum CaptchaError {
    #[error("Captcha verification request failed: {0}")]
    Transport(String),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Failed to read captcha config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed captcha config {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
