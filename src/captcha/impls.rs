// Standard library
use std::fs;
use std::path::Path;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

// Current module imports
use super::constants::SITEVERIFY_URL;
use super::errors::CaptchaError;
use super::traits::TokenVerifier;
use super::types::{CaptchaConfig, RecaptchaVerifier, VerifyResponse};

impl RecaptchaVerifier {
    pub fn new(config: CaptchaConfig) -> Result<Self, CaptchaError> {
        let client: Client = Client::builder().build()?;
        Ok(RecaptchaVerifier { config, client })
    }

    /// Reads the captcha secret document (`{"secret": "..."}`).
    pub fn load(path: &Path) -> Result<Self, CaptchaError> {
        let raw: String = fs::read_to_string(path).map_err(|e| CaptchaError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CaptchaConfig =
            serde_json::from_str(&raw).map_err(|e| CaptchaError::Malformed {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::new(config)
    }
}

#[async_trait]
impl TokenVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<bool, CaptchaError> {
        let response = self
            .client
            .post(SITEVERIFY_URL)
            .form(&[
                ("secret", self.config.secret.as_str()),
                ("response", token),
            ])
            .send()
            .await
            .map_err(|e| CaptchaError::Transport(format!("Failed to send request: {}", e)))?;

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| CaptchaError::Transport(format!("Failed to parse response: {}", e)))?;

        if !body.success && !body.error_codes.is_empty() {
            debug!(codes = ?body.error_codes, "Captcha service rejected the token");
        }

        Ok(body.success)
    }
}
