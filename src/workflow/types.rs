// Standard library
use std::collections::BTreeMap;
use std::sync::Arc;

// 3rd party crates
use chrono::{DateTime, Utc};
use serde::Serialize;

// Project imports
use crate::captcha::TokenVerifier;
use crate::providers::RecordClient;
use crate::registry::{ProviderRegistry, UsageRegistry};
use crate::store::{DomainStatus, RecordStore};

/// What the requester submitted on the create form.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub owner: String,
    pub subdomain: String,
    pub usage: String,
    pub email: String,
    pub base_domain: String,
    /// Remaining form fields, referenced by integration templates.
    pub extra_fields: BTreeMap<String, String>,
    pub captcha_token: String,
}

/// What the requester submitted on the delete form.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub owner: String,
    pub subdomain: String,
    pub email: String,
    pub base_domain: String,
    pub captcha_token: String,
}

/// Accepted create request. Issued whether or not provisioning succeeded;
/// `status` tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReceipt {
    pub subdomain: String,
    pub usage: String,
    pub status: DomainStatus,
}

/// One provider record that could not be deleted during teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDeleteFailure {
    pub record_id: String,
    pub reason: String,
}

/// Completed delete request. The entry is gone from the store either way;
/// `failures` lists provider records that were left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReceipt {
    pub fqdn: String,
    pub deleted: usize,
    pub failures: Vec<RecordDeleteFailure>,
}

/// Usage listing row: display name and form fields only. Integration
/// templates stay server-side.
#[derive(Debug, Clone, Serialize)]
pub struct UsageSummary {
    pub name: String,
    pub fields: Vec<serde_json::Value>,
}

/// Domain listing row for the request UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainOverview {
    pub subdomain: String,
    pub status: DomainStatus,
    pub date: DateTime<Utc>,
    pub domain: String,
}

/// Domain listing plus the base domains open for registration.
#[derive(Debug, Clone, Serialize)]
pub struct DomainsListing {
    pub domains: Vec<DomainOverview>,
    pub settings: Vec<String>,
}

/// Domain listing row for public display; everything else is filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicDomain {
    pub subdomain: String,
    pub domain: String,
    pub status: DomainStatus,
}

/// Availability verdict for one (subdomain, base domain) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub available: bool,
}

/// Orchestrates the subdomain lifecycle across the record store, the static
/// registries, the captcha verifier and the DNS provider.
pub struct DomainWorkflow {
    pub(super) store: Arc<RecordStore>,
    pub(super) usages: Arc<UsageRegistry>,
    pub(super) providers: Arc<ProviderRegistry>,
    pub(super) captcha: Arc<dyn TokenVerifier>,
    pub(super) dns: Arc<dyn RecordClient>,
}

impl DomainWorkflow {
    pub fn new(
        store: Arc<RecordStore>,
        usages: Arc<UsageRegistry>,
        providers: Arc<ProviderRegistry>,
        captcha: Arc<dyn TokenVerifier>,
        dns: Arc<dyn RecordClient>,
    ) -> Self {
        DomainWorkflow {
            store,
            usages,
            providers,
            captcha,
            dns,
        }
    }
}
