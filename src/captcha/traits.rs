// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::CaptchaError;

/// Verdict on a client-supplied captcha token.
///
/// `Ok(true)` means the token passed verification, `Ok(false)` means the
/// service rejected it, `Err` means no verdict could be obtained. Callers
/// treat all three distinctly in messaging but fail closed on the last two.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<bool, CaptchaError>;
}
