// 3rd party crates
use chrono::Utc;
use tracing::{error, info, warn};

// Project imports
use crate::store::{DomainEntry, DomainStatus};

// Current module imports
use super::errors::WorkflowError;
use super::functions::{build_record_spec, is_valid_key, normalize_key};
use super::types::{CreateReceipt, CreateRequest, DomainWorkflow};

impl DomainWorkflow {
    pub(super) async fn verify_captcha(&self, token: &str) -> Result<(), WorkflowError> {
        match self.captcha.verify(token).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(WorkflowError::CaptchaRejected),
            Err(e) => Err(WorkflowError::CaptchaUnavailable(e)),
        }
    }

    /// Registers a subdomain and provisions its DNS records.
    ///
    /// The registration is persisted as `requested` before any provider call
    /// so a provisioning failure never loses the request itself. The first
    /// successful record moves it to `success`; if at least one record was
    /// attempted and none succeeded it ends up `failed`. A usage type with
    /// no matching integration stays `requested`.
    pub async fn create(&self, req: CreateRequest) -> Result<CreateReceipt, WorkflowError> {
        self.verify_captcha(&req.captcha_token).await?;

        if req.base_domain.trim().is_empty() {
            return Err(WorkflowError::MissingBaseDomain);
        }

        let key = normalize_key(&req.subdomain);
        if !is_valid_key(&key) {
            return Err(WorkflowError::InvalidSubdomain);
        }

        let entry = DomainEntry {
            owner: req.owner.clone(),
            email: req.email.clone(),
            usage: req.usage.clone(),
            config: req.extra_fields.clone(),
            status: DomainStatus::Requested,
            date: Utc::now(),
            domain: req.base_domain.clone(),
        };

        let inserted = self
            .store
            .update(|map| {
                if map.contains(&key, &req.base_domain) {
                    return false;
                }
                map.insert(key.clone(), entry);
                true
            })
            .await?;

        if !inserted {
            return Err(WorkflowError::AlreadyExists);
        }
        info!(
            subdomain = %key,
            domain = %req.base_domain,
            usage = %req.usage,
            "Subdomain registered"
        );

        let status = self.provision(&key, &req).await?;
        Ok(CreateReceipt {
            subdomain: key,
            usage: req.usage,
            status,
        })
    }

    /// Runs every matching integration for a fresh registration and persists
    /// the resulting status.
    async fn provision(
        &self,
        key: &str,
        req: &CreateRequest,
    ) -> Result<DomainStatus, WorkflowError> {
        let creds = self
            .providers
            .provider_config(&req.base_domain)
            .and_then(|config| config.credentials(self.dns.provider_id()))
            .ok_or(WorkflowError::MissingProviderConfig)?;

        let templates: Vec<_> = match self.usages.usage(&req.usage) {
            Some(usage) => usage
                .integration
                .iter()
                .filter(|t| t.provider == self.dns.provider_id())
                .collect(),
            // Unknown usage types register without provisioning.
            None => Vec::new(),
        };

        let mut attempted = 0usize;
        let mut succeeded = 0usize;

        for template in templates {
            let record = match build_record_spec(template, key, &req.base_domain, &req.extra_fields)
            {
                Ok(record) => record,
                Err(e) => {
                    warn!(
                        subdomain = %key,
                        usage = %req.usage,
                        error = %e,
                        "Skipping integration with incomplete inputs"
                    );
                    continue;
                }
            };

            attempted += 1;
            match self.dns.create_record(creds, &record).await {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    error!(
                        subdomain = %key,
                        domain = %req.base_domain,
                        record = %record.name,
                        error = %e,
                        "Provider record creation failed"
                    );
                }
            }
        }

        let status = if succeeded > 0 {
            DomainStatus::Success
        } else if attempted > 0 {
            DomainStatus::Failed
        } else {
            DomainStatus::Requested
        };

        if status != DomainStatus::Requested {
            self.store
                .update(|map| {
                    if let Some(entry) = map.get_mut(key, &req.base_domain) {
                        entry.status = status;
                    }
                })
                .await?;
        }

        Ok(status)
    }
}
