// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::registry::ProviderCredentials;

// Current module imports
use super::errors::ProviderError;
use super::types::{DnsRecordSpec, RecordHandle};

/// Record-level operations against one DNS provider.
///
/// Credentials are passed per call because each base domain carries its own
/// zone and token; one client instance serves every zone of its provider.
/// The three operations are exactly what the lifecycle workflow needs:
/// create on provisioning, list-by-name plus delete-by-id on teardown.
/// Calls are attempted exactly once; retry policy belongs to the caller,
/// and the workflow deliberately has none.
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// Provider identifier, matched against integration templates
    /// (lowercase, e.g. `"cloudflare"`).
    fn provider_id(&self) -> &'static str;

    /// Creates one DNS record in the credentialed zone.
    async fn create_record(
        &self,
        creds: &ProviderCredentials,
        record: &DnsRecordSpec,
    ) -> Result<(), ProviderError>;

    /// Lists all records whose name equals `name` exactly.
    async fn list_records(
        &self,
        creds: &ProviderCredentials,
        name: &str,
    ) -> Result<Vec<RecordHandle>, ProviderError>;

    /// Deletes one record by provider-side id.
    async fn delete_record(
        &self,
        creds: &ProviderCredentials,
        record_id: &str,
    ) -> Result<(), ProviderError>;
}
