// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

/// Errors raised while loading or validating the static registries.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Provider settings document not found at {0}")]
    MissingSettings(PathBuf),

    #[error("Usage '{usage}' integration must set exactly one of nameField or nameTemplate")]
    AmbiguousNameSource { usage: String },

    #[error("Usage '{usage}' integration has an empty record type")]
    MissingRecordType { usage: String },

    #[error("Provider credentials for base domain '{domain}' are incomplete")]
    IncompleteCredentials { domain: String },
}

/// Errors raised while parsing a record-name template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown placeholder '{0}' (expected 'subdomain' or 'domain')")]
    UnknownPlaceholder(String),

    #[error("Unterminated placeholder")]
    Unterminated,
}
