// Standard library
use std::collections::BTreeMap;

// 3rd party crates
use serde::{Deserialize, Deserializer};

// Current module imports
use super::template::NameTemplate;

/// One DNS integration a usage type requires.
///
/// Field names mirror the usage registry document (`recordType`,
/// `nameField`, ...). Exactly one of `name_field` / `name_template` must be
/// set; content comes from the caller-supplied field named by
/// `content_field`, falling back to the literal `content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTemplate {
    pub provider: String,
    pub record_type: String,
    #[serde(default)]
    pub name_field: Option<String>,
    #[serde(default)]
    pub name_template: Option<NameTemplate>,
    #[serde(default)]
    pub content_field: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

/// A usage type: display name, the form fields the client must supply, and
/// the DNS integrations to provision. The field descriptors are opaque to
/// the workflow and echoed back verbatim by the usage listing.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageConfig {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub integration: Vec<IntegrationTemplate>,
}

/// The document historically allows `integration` to be a single object or
/// an array of them.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<IntegrationTemplate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(IntegrationTemplate),
        Many(Vec<IntegrationTemplate>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(template) => vec![template],
        OneOrMany::Many(templates) => templates,
    })
}

/// API credentials for one provider under one base domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    pub api_token: String,
    pub zone_id: String,
}

/// Provider configuration for one base domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainProviderConfig {
    #[serde(default)]
    pub cloudflare: Option<ProviderCredentials>,
}

impl DomainProviderConfig {
    /// Credentials for the named provider, if configured.
    pub fn credentials(&self, provider: &str) -> Option<&ProviderCredentials> {
        match provider {
            "cloudflare" => self.cloudflare.as_ref(),
            _ => None,
        }
    }
}

/// Read-only snapshot of the usage registry, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct UsageRegistry {
    pub(super) usages: BTreeMap<String, UsageConfig>,
}

/// Read-only snapshot of the per-base-domain provider settings.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    pub(super) domains: BTreeMap<String, DomainProviderConfig>,
}
