// 3rd party crates
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::{debug, info};

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::RecordClient;
use crate::providers::types::{DnsRecordSpec, RecordHandle};
use crate::registry::ProviderCredentials;

// Current module imports
use super::constants::CLOUDFLARE_API_BASE;
use super::errors::CloudflareError;
use super::functions::{auth_header, join_api_errors};
use super::types::{ApiResponse, CloudflareClient, DnsRecordResult};

impl CloudflareClient {
    pub fn new() -> Result<Self, CloudflareError> {
        let client: Client = Client::builder()
            .build()
            .map_err(CloudflareError::HttpClientBuild)?;
        Ok(CloudflareClient { client })
    }
}

#[async_trait]
impl RecordClient for CloudflareClient {
    fn provider_id(&self) -> &'static str {
        "cloudflare"
    }

    async fn create_record(
        &self,
        creds: &ProviderCredentials,
        record: &DnsRecordSpec,
    ) -> Result<(), ProviderError> {
        let url = format!(
            "{}/zones/{}/dns_records",
            CLOUDFLARE_API_BASE, creds.zone_id
        );

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, auth_header(creds)?)
            .json(record)
            .send()
            .await
            .map_err(|e| CloudflareError::CreateFailed {
                zone: creds.zone_id.clone(),
                name: record.name.clone(),
                message: format!("Failed to send create request: {}", e),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CloudflareError::InvalidApiToken(creds.zone_id.clone()).into());
        }
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CloudflareError::CreateFailed {
                zone: creds.zone_id.clone(),
                name: record.name.clone(),
                message: format!("HTTP {} - {}", status, error_body),
            }
            .into());
        }

        let body: ApiResponse<DnsRecordResult> =
            response
                .json()
                .await
                .map_err(|e| CloudflareError::CreateFailed {
                    zone: creds.zone_id.clone(),
                    name: record.name.clone(),
                    message: format!("Failed to parse response: {}", e),
                })?;

        if !body.success {
            return Err(CloudflareError::CreateFailed {
                zone: creds.zone_id.clone(),
                name: record.name.clone(),
                message: join_api_errors(&body.errors),
            }
            .into());
        }

        info!(
            zone = %creds.zone_id,
            name = %record.name,
            record_type = %record.record_type,
            "Created DNS record"
        );
        Ok(())
    }

    async fn list_records(
        &self,
        creds: &ProviderCredentials,
        name: &str,
    ) -> Result<Vec<RecordHandle>, ProviderError> {
        let url = format!(
            "{}/zones/{}/dns_records?name={}",
            CLOUDFLARE_API_BASE, creds.zone_id, name
        );

        debug!(zone = %creds.zone_id, name = %name, "Listing DNS records");

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, auth_header(creds)?)
            .send()
            .await
            .map_err(|e| CloudflareError::ListFailed {
                zone: creds.zone_id.clone(),
                name: name.to_string(),
                message: format!("Failed to send list request: {}", e),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CloudflareError::InvalidApiToken(creds.zone_id.clone()).into());
        }
        if !status.is_success() {
            return Err(CloudflareError::ListFailed {
                zone: creds.zone_id.clone(),
                name: name.to_string(),
                message: format!("HTTP {}", status),
            }
            .into());
        }

        let body: ApiResponse<Vec<DnsRecordResult>> =
            response
                .json()
                .await
                .map_err(|e| CloudflareError::ListFailed {
                    zone: creds.zone_id.clone(),
                    name: name.to_string(),
                    message: format!("Failed to parse response: {}", e),
                })?;

        if !body.success {
            return Err(CloudflareError::ListFailed {
                zone: creds.zone_id.clone(),
                name: name.to_string(),
                message: join_api_errors(&body.errors),
            }
            .into());
        }

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .map(|r| RecordHandle {
                id: r.id,
                name: r.name,
            })
            .collect())
    }

    async fn delete_record(
        &self,
        creds: &ProviderCredentials,
        record_id: &str,
    ) -> Result<(), ProviderError> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            CLOUDFLARE_API_BASE, creds.zone_id, record_id
        );

        let response = self
            .client
            .delete(&url)
            .header(header::AUTHORIZATION, auth_header(creds)?)
            .send()
            .await
            .map_err(|e| CloudflareError::DeleteFailed {
                zone: creds.zone_id.clone(),
                record_id: record_id.to_string(),
                message: format!("Failed to send delete request: {}", e),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CloudflareError::InvalidApiToken(creds.zone_id.clone()).into());
        }
        if !status.is_success() {
            return Err(CloudflareError::DeleteFailed {
                zone: creds.zone_id.clone(),
                record_id: record_id.to_string(),
                message: format!("HTTP {}", status),
            }
            .into());
        }

        info!(zone = %creds.zone_id, record_id = %record_id, "Deleted DNS record");
        Ok(())
    }
}
