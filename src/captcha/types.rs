// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Shared secret for the captcha verification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptchaConfig {
    pub secret: String,
}

/// Calls the reCAPTCHA siteverify endpoint with the process secret and a
/// caller-supplied token.
pub struct RecaptchaVerifier {
    pub(super) config: CaptchaConfig,
    pub(super) client: Client,
}

/// Body of a siteverify reply. Only `success` matters for the verdict.
#[derive(Debug, Deserialize)]
pub(super) struct VerifyResponse {
    pub success: bool,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}
