//! Read-only views over the registries and the record store. None of them
//! leak provider credentials or requester identities.

// Standard library
use std::collections::BTreeMap;

// Current module imports
use super::errors::WorkflowError;
use super::functions::normalize_key;
use super::types::{
    Availability, DomainOverview, DomainWorkflow, DomainsListing, PublicDomain, UsageSummary,
};

impl DomainWorkflow {
    /// The usage catalog for the request form: display names and form field
    /// descriptors, keyed by usage id. Integration templates are stripped.
    pub fn list_usages(&self) -> BTreeMap<String, UsageSummary> {
        self.usages
            .iter()
            .map(|(key, usage)| {
                (
                    key.clone(),
                    UsageSummary {
                        name: usage.name.clone(),
                        fields: usage.fields.clone(),
                    },
                )
            })
            .collect()
    }

    /// Registered domains for the request UI, plus the base domains open for
    /// registration. Owner and email never leave the store through this
    /// view.
    pub async fn list_domains(&self) -> Result<DomainsListing, WorkflowError> {
        let map = self.store.load().await?;
        let domains = map
            .iter()
            .map(|(key, entry)| DomainOverview {
                subdomain: key.to_string(),
                status: entry.status,
                date: entry.date,
                domain: entry.domain.clone(),
            })
            .collect();

        Ok(DomainsListing {
            domains,
            settings: self.providers.base_domains(),
        })
    }

    /// Public directory of registered domains: label, base domain and
    /// status, nothing else.
    pub async fn list_public_domains(&self) -> Result<Vec<PublicDomain>, WorkflowError> {
        let map = self.store.load().await?;
        Ok(map
            .iter()
            .map(|(key, entry)| PublicDomain {
                subdomain: key.to_string(),
                domain: entry.domain.clone(),
                status: entry.status,
            })
            .collect())
    }

    /// Whether a (subdomain, base domain) pair is still free. The pair is
    /// normalized the same way the create path normalizes it, so an answer
    /// of `available` holds for the create that follows.
    pub async fn check_availability(
        &self,
        subdomain: &str,
        base_domain: &str,
    ) -> Result<Availability, WorkflowError> {
        let key = normalize_key(subdomain);
        let domain = normalize_key(base_domain);
        if key.is_empty() || domain.is_empty() {
            return Err(WorkflowError::MissingQueryFields);
        }

        let map = self.store.load().await?;
        Ok(Availability {
            available: !map.contains(&key, &domain),
        })
    }
}
