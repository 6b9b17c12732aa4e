//! Mock seams and factories shared by the workflow tests.

// Standard library
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// 3rd party crates
use async_trait::async_trait;
use tempfile::TempDir;

// Project imports
use crate::captcha::{CaptchaError, TokenVerifier};
use crate::providers::{DnsRecordSpec, ProviderError, RecordClient, RecordHandle};
use crate::registry::{ProviderRegistry, UsageRegistry};
use crate::store::RecordStore;
use crate::workflow::types::{CreateRequest, DeleteRequest, DomainWorkflow};

#[derive(Debug, Clone, Copy)]
pub(crate) enum VerifierMode {
    Pass,
    Reject,
    Unavailable,
}

pub(crate) struct MockVerifier {
    mode: VerifierMode,
}

impl MockVerifier {
    pub fn new(mode: VerifierMode) -> Arc<Self> {
        Arc::new(MockVerifier { mode })
    }
}

#[async_trait]
impl TokenVerifier for MockVerifier {
    async fn verify(&self, _token: &str) -> Result<bool, CaptchaError> {
        match self.mode {
            VerifierMode::Pass => Ok(true),
            VerifierMode::Reject => Ok(false),
            VerifierMode::Unavailable => {
                Err(CaptchaError::Transport("connection refused".into()))
            }
        }
    }
}

/// Scriptable provider: records every call, fails the configured ones.
#[derive(Default)]
pub(crate) struct MockRecordClient {
    pub create_failures: Vec<String>,
    pub delete_failures: Vec<String>,
    pub list_records: Vec<RecordHandle>,
    pub fail_list: bool,
    pub created: Mutex<Vec<DnsRecordSpec>>,
    pub listed: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
}

impl MockRecordClient {
    pub fn new() -> Self {
        MockRecordClient::default()
    }

    pub fn with_list(mut self, records: Vec<RecordHandle>) -> Self {
        self.list_records = records;
        self
    }

    pub fn failing_create(mut self, name: &str) -> Self {
        self.create_failures.push(name.to_string());
        self
    }

    pub fn failing_delete(mut self, record_id: &str) -> Self {
        self.delete_failures.push(record_id.to_string());
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    fn error(&self, message: &str) -> ProviderError {
        ProviderError::Other {
            provider: self.provider_id().to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl RecordClient for MockRecordClient {
    fn provider_id(&self) -> &'static str {
        "cloudflare"
    }

    async fn create_record(
        &self,
        _creds: &crate::registry::ProviderCredentials,
        record: &DnsRecordSpec,
    ) -> Result<(), ProviderError> {
        self.created.lock().unwrap().push(record.clone());
        if self.create_failures.contains(&record.name) {
            return Err(self.error("create refused"));
        }
        Ok(())
    }

    async fn list_records(
        &self,
        _creds: &crate::registry::ProviderCredentials,
        name: &str,
    ) -> Result<Vec<RecordHandle>, ProviderError> {
        self.listed.lock().unwrap().push(name.to_string());
        if self.fail_list {
            return Err(self.error("list refused"));
        }
        Ok(self.list_records.clone())
    }

    async fn delete_record(
        &self,
        _creds: &crate::registry::ProviderCredentials,
        record_id: &str,
    ) -> Result<(), ProviderError> {
        self.deleted.lock().unwrap().push(record_id.to_string());
        if self.delete_failures.contains(&record_id.to_string()) {
            return Err(self.error("delete refused"));
        }
        Ok(())
    }
}

/// `a.com` and `b.com` carry Cloudflare credentials; `bare.net` has none.
pub(crate) fn provider_registry() -> Arc<ProviderRegistry> {
    Arc::new(
        ProviderRegistry::from_domains(
            serde_json::from_str(
                r#"{
                    "a.com": {"cloudflare": {"apiToken": "tok-a", "zoneId": "zone-a"}},
                    "b.com": {"cloudflare": {"apiToken": "tok-b", "zoneId": "zone-b"}},
                    "bare.net": {}
                }"#,
            )
            .unwrap(),
        )
        .unwrap(),
    )
}

/// `blog` provisions one proxied CNAME, `verify` one TXT plus a CNAME,
/// `parked` declares no integration.
pub(crate) fn usage_registry() -> Arc<UsageRegistry> {
    Arc::new(
        UsageRegistry::from_usages(
            serde_json::from_str(
                r#"{
                    "blog": {
                        "name": "Blog",
                        "fields": [{"name": "target", "label": "Target host"}],
                        "integration": {
                            "provider": "cloudflare",
                            "recordType": "CNAME",
                            "nameTemplate": "{{subdomain}}.{{domain}}",
                            "contentField": "target",
                            "content": "pages.example.net",
                            "ttl": 3600,
                            "proxied": true
                        }
                    },
                    "verify": {
                        "name": "Verified site",
                        "integration": [
                            {
                                "provider": "cloudflare",
                                "recordType": "TXT",
                                "nameTemplate": "_verify.{{subdomain}}.{{domain}}",
                                "contentField": "token",
                                "ttl": 300
                            },
                            {
                                "provider": "cloudflare",
                                "recordType": "CNAME",
                                "nameTemplate": "{{subdomain}}.{{domain}}",
                                "content": "pages.example.net",
                                "ttl": 3600,
                                "proxied": true
                            }
                        ]
                    },
                    "parked": {
                        "name": "Parked",
                        "fields": []
                    }
                }"#,
            )
            .unwrap(),
        )
        .unwrap(),
    )
}

pub(crate) fn temp_store() -> (TempDir, Arc<RecordStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordStore::new(dir.path().join("domains.json")));
    (dir, store)
}

pub(crate) fn workflow(
    mode: VerifierMode,
    dns: Arc<MockRecordClient>,
    store: Arc<RecordStore>,
) -> DomainWorkflow {
    DomainWorkflow::new(
        store,
        usage_registry(),
        provider_registry(),
        MockVerifier::new(mode),
        dns,
    )
}

pub(crate) fn create_request(subdomain: &str, base_domain: &str, usage: &str) -> CreateRequest {
    let mut extra_fields = BTreeMap::new();
    extra_fields.insert("target".to_string(), "my-pages.example.net".to_string());
    extra_fields.insert("token".to_string(), "tok-123".to_string());
    CreateRequest {
        owner: "ada".to_string(),
        subdomain: subdomain.to_string(),
        usage: usage.to_string(),
        email: "ada@example.com".to_string(),
        base_domain: base_domain.to_string(),
        extra_fields,
        captcha_token: "captcha-token".to_string(),
    }
}

pub(crate) fn delete_request(subdomain: &str, base_domain: &str) -> DeleteRequest {
    DeleteRequest {
        owner: "ada".to_string(),
        subdomain: subdomain.to_string(),
        email: "ada@example.com".to_string(),
        base_domain: base_domain.to_string(),
        captcha_token: "captcha-token".to_string(),
    }
}
