//! subgate — subdomain request and DNS provisioning workflow.
//!
//! End users request a subdomain under one of several pre-configured base
//! domains; the workflow verifies a captcha token, validates and persists the
//! request, provisions DNS records at the provider according to the usage
//! type's integration templates, and later tears the subdomain down again on
//! request. The HTTP layer, static files and captcha widget are the embedding
//! process's business; this crate is the state machine in between.
//!
//! ## Components
//!
//! - [`store`]: the JSON-backed record store, the only mutable persisted
//!   state. Whole-document read/modify/write, serialized through a single
//!   lock so concurrent requests cannot lose updates.
//! - [`registry`]: immutable snapshots of the usage registry (form fields +
//!   DNS integration templates) and the per-base-domain provider settings.
//! - [`captcha`]: reCAPTCHA siteverify client behind the [`captcha::TokenVerifier`]
//!   trait. Fail-closed: any transport problem denies the request.
//! - [`providers`]: the DNS provider seam ([`providers::RecordClient`]) and
//!   its Cloudflare implementation.
//! - [`workflow`]: the create/delete lifecycle paths and the read-only query
//!   surface, orchestrating everything above.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use subgate::prelude::*;
//!
//! let config = ConfigManager::new()?;
//! let settings = config.settings();
//! subgate::telemetry::init(&settings.get_log_level());
//!
//! let workflow = DomainWorkflow::new(
//!     Arc::new(RecordStore::new(settings.domains_path())),
//!     Arc::new(UsageRegistry::load(&settings.usages_path())?),
//!     Arc::new(ProviderRegistry::load(&settings.providers_path())?),
//!     Arc::new(RecaptchaVerifier::load(&settings.captcha_path())?),
//!     Arc::new(CloudflareClient::new()?),
//! );
//! // hand `workflow` to the HTTP layer
//! ```

pub mod captcha;
pub mod providers;
pub mod registry;
pub mod settings;
pub mod store;
pub mod telemetry;
pub mod workflow;

/// One-stop imports for embedders.
pub mod prelude {
    pub use crate::captcha::{RecaptchaVerifier, TokenVerifier};
    pub use crate::providers::cloudflare::CloudflareClient;
    pub use crate::providers::RecordClient;
    pub use crate::registry::{ProviderRegistry, UsageRegistry};
    pub use crate::settings::{ConfigManager, Settings};
    pub use crate::store::RecordStore;
    pub use crate::workflow::{
        CreateRequest, DeleteRequest, DomainWorkflow, RejectKind, WorkflowError,
    };
}
