//! The domain-lifecycle workflow: request a subdomain, provision its DNS
//! records, and later tear it down again. Every inbound mutation passes the
//! captcha gate first, then the validation gates, then the record store, and
//! only then the provider.

pub mod create;
pub mod delete;
pub mod errors;
pub mod functions;
pub mod queries;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{IntegrationError, RejectKind, WorkflowError};
pub use types::{
    Availability, CreateReceipt, CreateRequest, DeleteReceipt, DeleteRequest, DomainOverview,
    DomainWorkflow, DomainsListing, PublicDomain, RecordDeleteFailure, UsageSummary,
};
