// 3rd party crates
use thiserror::Error;

// Project imports
use crate::captcha::CaptchaError;
use crate::providers::ProviderError;
use crate::store::StoreError;

/// Which redirect channel a rejection is reported on. `Failed` covers
/// everything the requester can fix; `Error` covers server-side trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    Failed,
    Error,
}

/// A rejected create or delete request.
///
/// The `Display` text of each variant is the user-facing message; the
/// ownership check deliberately uses one generic message so a caller cannot
/// probe which of owner, email or base domain was wrong.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Captcha verification failed.")]
    CaptchaRejected,

    #[error("Captcha verification error.")]
    CaptchaUnavailable(#[source] CaptchaError),

    #[error("Please choose a target domain.")]
    MissingBaseDomain,

    #[error("Invalid subdomain. Only lowercase letters, numbers, and hyphens (-) allowed. Cannot start or end with a hyphen.")]
    InvalidSubdomain,

    #[error("Please provide subdomain, baseDomain, owner, and email.")]
    MissingDeleteFields,

    #[error("Missing subdomain or baseDomain")]
    MissingQueryFields,

    #[error("Subdomain already exists on that domain.")]
    AlreadyExists,

    #[error("Subdomain not found.")]
    NotFound,

    #[error("Owner or email does not match.")]
    OwnershipMismatch,

    #[error("Invalid domain or missing Cloudflare configuration.")]
    MissingProviderConfig,

    #[error("Failed to fetch DNS records.")]
    ListRecords(#[source] ProviderError),

    #[error("Failed to update the record store.")]
    Store(#[from] StoreError),
}

impl WorkflowError {
    /// How the embedding layer should report this rejection.
    pub fn kind(&self) -> RejectKind {
        match self {
            WorkflowError::CaptchaUnavailable(_)
            | WorkflowError::ListRecords(_)
            | WorkflowError::Store(_) => RejectKind::Error,
            _ => RejectKind::Failed,
        }
    }
}

/// Why a single integration template produced no provider call. These are
/// logged and skipped; they never abort the create path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrationError {
    #[error("form field '{0}' was not supplied")]
    MissingField(String),

    #[error("no content field value and no literal content")]
    MissingContent,
}
