// Standard library
use std::collections::BTreeMap;
use std::path::PathBuf;

// 3rd party crates
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Lifecycle state of a subdomain request.
///
/// `Requested` is the initial state and the terminal state for usage types
/// without any DNS integration. `Success` is entered on the first successful
/// provider call and never left. `Failed` is entered when every attempted
/// integration errored, so a stuck request is distinguishable from one that
/// was never meant to be provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Requested,
    Success,
    Failed,
}

/// One subdomain registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub owner: String,
    pub email: String,
    pub usage: String,
    /// Extra form fields, opaque to the workflow; integration templates may
    /// reference them by name.
    #[serde(default)]
    pub config: BTreeMap<String, String>,
    pub status: DomainStatus,
    pub date: DateTime<Utc>,
    /// Base domain the subdomain is registered under.
    pub domain: String,
}

/// The persisted record-store document: subdomain label → base domain →
/// entry. The inner map keeps the same label on different base domains as
/// independent registrations; the inner key always equals `entry.domain`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainMap(pub(super) BTreeMap<String, BTreeMap<String, DomainEntry>>);

impl DomainMap {
    pub fn get(&self, key: &str, domain: &str) -> Option<&DomainEntry> {
        self.0.get(key).and_then(|by_domain| by_domain.get(domain))
    }

    pub fn get_mut(&mut self, key: &str, domain: &str) -> Option<&mut DomainEntry> {
        self.0
            .get_mut(key)
            .and_then(|by_domain| by_domain.get_mut(domain))
    }

    pub fn contains(&self, key: &str, domain: &str) -> bool {
        self.get(key, domain).is_some()
    }

    /// Whether any base domain carries this label.
    pub fn contains_label(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|by_domain| !by_domain.is_empty())
    }

    /// All registrations of one label, across base domains.
    pub fn label_entries(&self, key: &str) -> impl Iterator<Item = &DomainEntry> {
        self.0.get(key).into_iter().flat_map(|by_domain| by_domain.values())
    }

    /// Inserts an entry under its own base domain, replacing any previous
    /// registration of the same (label, base domain) pair.
    pub fn insert(&mut self, key: impl Into<String>, entry: DomainEntry) {
        self.0
            .entry(key.into())
            .or_default()
            .insert(entry.domain.clone(), entry);
    }

    /// Removes one (label, base domain) registration.
    pub fn remove(&mut self, key: &str, domain: &str) -> Option<DomainEntry> {
        let by_domain = self.0.get_mut(key)?;
        let removed = by_domain.remove(domain);
        if by_domain.is_empty() {
            self.0.remove(key);
        }
        removed
    }

    /// Flat iteration over every registration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainEntry)> {
        self.0
            .iter()
            .flat_map(|(key, by_domain)| by_domain.values().map(move |e| (key.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Durable store for [`DomainMap`], backed by a single JSON document.
///
/// Reads and writes are whole-document operations; the mutex serializes
/// every load→mutate→save cycle so two concurrent requests cannot lose each
/// other's update.
pub struct RecordStore {
    pub(super) path: PathBuf,
    pub(super) lock: Mutex<()>,
}
