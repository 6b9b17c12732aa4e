// Standard library
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// 3rd party crates
use tracing::info;

// Current module imports
use super::errors::RegistryError;
use super::types::{
    DomainProviderConfig, IntegrationTemplate, ProviderRegistry, UsageConfig, UsageRegistry,
};

impl IntegrationTemplate {
    pub(super) fn validate(&self, usage: &str) -> Result<(), RegistryError> {
        if self.name_field.is_some() == self.name_template.is_some() {
            return Err(RegistryError::AmbiguousNameSource {
                usage: usage.to_string(),
            });
        }

        if self.record_type.trim().is_empty() {
            return Err(RegistryError::MissingRecordType {
                usage: usage.to_string(),
            });
        }

        Ok(())
    }
}

impl UsageRegistry {
    /// Loads the usage registry document. A missing document is an empty
    /// registry; every declared integration is validated up front.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            info!(path = %path.display(), "No usage registry document, starting empty");
            return Ok(UsageRegistry::default());
        }

        let raw: String = fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let usages: BTreeMap<String, UsageConfig> =
            serde_json::from_str(&raw).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let registry = UsageRegistry::from_usages(usages)?;
        info!(count = registry.usages.len(), "Usage registry loaded");
        Ok(registry)
    }

    /// Builds a registry from an already-parsed usage map.
    pub fn from_usages(
        usages: BTreeMap<String, UsageConfig>,
    ) -> Result<Self, RegistryError> {
        for (key, usage) in &usages {
            for template in &usage.integration {
                template.validate(key)?;
            }
        }
        Ok(UsageRegistry { usages })
    }

    pub fn usage(&self, name: &str) -> Option<&UsageConfig> {
        self.usages.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &UsageConfig)> {
        self.usages.iter()
    }
}

impl ProviderRegistry {
    /// Loads the provider settings document. Unlike the usage registry this
    /// document is mandatory: without it no base domain can accept requests.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Err(RegistryError::MissingSettings(path.to_path_buf()));
        }

        let raw: String = fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let domains: BTreeMap<String, DomainProviderConfig> =
            serde_json::from_str(&raw).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let registry = ProviderRegistry::from_domains(domains)?;
        info!(count = registry.domains.len(), "Provider settings loaded");
        Ok(registry)
    }

    /// Builds a registry from an already-parsed settings map.
    pub fn from_domains(
        domains: BTreeMap<String, DomainProviderConfig>,
    ) -> Result<Self, RegistryError> {
        for (domain, config) in &domains {
            if let Some(creds) = &config.cloudflare {
                if creds.api_token.trim().is_empty() || creds.zone_id.trim().is_empty() {
                    return Err(RegistryError::IncompleteCredentials {
                        domain: domain.clone(),
                    });
                }
            }
        }
        Ok(ProviderRegistry { domains })
    }

    /// Provider configuration for a base domain, if any.
    pub fn provider_config(&self, base_domain: &str) -> Option<&DomainProviderConfig> {
        self.domains.get(base_domain)
    }

    /// The configured base domain names, in document order. Credentials are
    /// never exposed through this path.
    pub fn base_domains(&self) -> Vec<String> {
        self.domains.keys().cloned().collect()
    }
}
