// 3rd party crates
use tracing::{info, warn};

// Current module imports
use super::errors::WorkflowError;
use super::functions::normalize_key;
use super::types::{DeleteReceipt, DeleteRequest, DomainWorkflow, RecordDeleteFailure};

impl DomainWorkflow {
    /// Tears a subdomain down: removes its provider records, then the store
    /// entry.
    ///
    /// The caller must present the exact owner, email and base domain the
    /// entry was registered with; possession of all three is the only
    /// authorization. A failed record listing aborts before anything is
    /// touched, but once teardown starts the store entry is removed even if
    /// some records could not be deleted. Those leftovers are surfaced in
    /// the receipt instead of silently dropped.
    pub async fn delete(&self, req: DeleteRequest) -> Result<DeleteReceipt, WorkflowError> {
        self.verify_captcha(&req.captcha_token).await?;

        if req.subdomain.trim().is_empty()
            || req.base_domain.trim().is_empty()
            || req.owner.is_empty()
            || req.email.is_empty()
        {
            return Err(WorkflowError::MissingDeleteFields);
        }

        let key = normalize_key(&req.subdomain);

        let map = self.store.load().await?;
        if !map.contains_label(&key) {
            return Err(WorkflowError::NotFound);
        }
        let matched = map.label_entries(&key).any(|entry| {
            entry.domain == req.base_domain
                && entry.owner == req.owner
                && entry.email == req.email
        });
        if !matched {
            return Err(WorkflowError::OwnershipMismatch);
        }

        let creds = self
            .providers
            .provider_config(&req.base_domain)
            .and_then(|config| config.credentials(self.dns.provider_id()))
            .ok_or(WorkflowError::MissingProviderConfig)?;

        let fqdn = format!("{}.{}", key, req.base_domain);
        let records = self
            .dns
            .list_records(creds, &fqdn)
            .await
            .map_err(WorkflowError::ListRecords)?;

        let mut deleted = 0usize;
        let mut failures: Vec<RecordDeleteFailure> = Vec::new();
        for record in records {
            match self.dns.delete_record(creds, &record.id).await {
                Ok(()) => deleted += 1,
                Err(e) => {
                    warn!(
                        record_id = %record.id,
                        name = %record.name,
                        error = %e,
                        "Provider record deletion failed, continuing"
                    );
                    failures.push(RecordDeleteFailure {
                        record_id: record.id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.store
            .update(|map| {
                map.remove(&key, &req.base_domain);
            })
            .await?;
        info!(
            subdomain = %key,
            domain = %req.base_domain,
            deleted,
            leftover = failures.len(),
            "Subdomain deleted"
        );

        Ok(DeleteReceipt {
            fqdn,
            deleted,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::*;
    use super::*;
    use crate::providers::RecordHandle;
    use std::sync::Arc;

    fn handles() -> Vec<RecordHandle> {
        vec![
            RecordHandle {
                id: "rec-1".into(),
                name: "docs.a.com".into(),
            },
            RecordHandle {
                id: "rec-2".into(),
                name: "docs.a.com".into(),
            },
        ]
    }

    async fn seeded_workflow(
        dns: Arc<MockRecordClient>,
    ) -> (tempfile::TempDir, Arc<crate::store::RecordStore>, DomainWorkflow) {
        let (dir, store) = temp_store();
        let setup = workflow(VerifierMode::Pass, Arc::new(MockRecordClient::new()), store.clone());
        setup
            .create(create_request("docs", "a.com", "blog"))
            .await
            .unwrap();
        let wf = workflow(VerifierMode::Pass, dns, store.clone());
        (dir, store, wf)
    }

    #[tokio::test]
    async fn delete_removes_the_entry_and_its_records() {
        let dns = Arc::new(MockRecordClient::new().with_list(handles()));
        let (_dir, store, workflow) = seeded_workflow(dns.clone()).await;

        let receipt = workflow.delete(delete_request("docs", "a.com")).await.unwrap();
        assert_eq!(receipt.fqdn, "docs.a.com");
        assert_eq!(receipt.deleted, 2);
        assert!(receipt.failures.is_empty());

        assert!(store.load().await.unwrap().is_empty());
        assert_eq!(*dns.listed.lock().unwrap(), vec!["docs.a.com".to_string()]);
        assert_eq!(
            *dns.deleted.lock().unwrap(),
            vec!["rec-1".to_string(), "rec-2".to_string()]
        );
    }

    #[tokio::test]
    async fn any_single_credential_mismatch_is_rejected() {
        let dns = Arc::new(MockRecordClient::new().with_list(handles()));
        let (_dir, store, workflow) = seeded_workflow(dns.clone()).await;

        let mut wrong_owner = delete_request("docs", "a.com");
        wrong_owner.owner = "grace".to_string();
        let mut wrong_email = delete_request("docs", "a.com");
        wrong_email.email = "grace@example.com".to_string();
        let wrong_domain = delete_request("docs", "b.com");

        for req in [wrong_owner, wrong_email, wrong_domain] {
            let err = workflow.delete(req).await.unwrap_err();
            assert!(matches!(err, WorkflowError::OwnershipMismatch));
        }

        // All three rejections share one message so nothing leaks about
        // which field was wrong.
        assert_eq!(
            WorkflowError::OwnershipMismatch.to_string(),
            "Owner or email does not match."
        );

        assert!(store.load().await.unwrap().contains("docs", "a.com"));
        assert!(dns.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_label_is_not_found() {
        let dns = Arc::new(MockRecordClient::new());
        let (_dir, _store, workflow) = seeded_workflow(dns).await;

        let err = workflow
            .delete(delete_request("nothing-here", "a.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_any_lookup() {
        let dns = Arc::new(MockRecordClient::new());
        let (_dir, _store, workflow) = seeded_workflow(dns.clone()).await;

        let mut req = delete_request("docs", "a.com");
        req.email = String::new();
        let err = workflow.delete(req).await.unwrap_err();
        assert!(matches!(err, WorkflowError::MissingDeleteFields));
        assert!(dns.listed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_captcha_stops_before_the_store() {
        let dns = Arc::new(MockRecordClient::new().with_list(handles()));
        let (_dir, store) = temp_store();
        let setup = workflow(VerifierMode::Pass, Arc::new(MockRecordClient::new()), store.clone());
        setup
            .create(create_request("docs", "a.com", "blog"))
            .await
            .unwrap();

        let gated = workflow(VerifierMode::Reject, dns.clone(), store.clone());
        let err = gated.delete(delete_request("docs", "a.com")).await.unwrap_err();
        assert!(matches!(err, WorkflowError::CaptchaRejected));

        assert!(store.load().await.unwrap().contains("docs", "a.com"));
        assert!(dns.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_listing_aborts_without_touching_anything() {
        let dns = Arc::new(MockRecordClient::new().failing_list());
        let (_dir, store, workflow) = seeded_workflow(dns.clone()).await;

        let err = workflow.delete(delete_request("docs", "a.com")).await.unwrap_err();
        assert!(matches!(err, WorkflowError::ListRecords(_)));
        assert_eq!(err.kind(), super::super::errors::RejectKind::Error);

        assert!(store.load().await.unwrap().contains("docs", "a.com"));
        assert!(dns.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn leftover_records_are_surfaced_but_the_entry_still_goes() {
        let dns = Arc::new(
            MockRecordClient::new()
                .with_list(handles())
                .failing_delete("rec-2"),
        );
        let (_dir, store, workflow) = seeded_workflow(dns.clone()).await;

        let receipt = workflow.delete(delete_request("docs", "a.com")).await.unwrap();
        assert_eq!(receipt.deleted, 1);
        assert_eq!(receipt.failures.len(), 1);
        assert_eq!(receipt.failures[0].record_id, "rec-2");

        assert!(store.load().await.unwrap().is_empty());
    }
}
