// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::cloudflare::errors::CloudflareError;

/// Provider-independent error surface of [`RecordClient`].
///
/// [`RecordClient`]: crate::providers::RecordClient
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Cloudflare(#[from] CloudflareError),

    #[error("{provider} error: {message}")]
    Other { provider: String, message: String },
}
