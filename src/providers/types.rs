// 3rd party crates
use serde::Serialize;

/// Record payload for a provider create call.
///
/// Serializes to the provider wire shape: `type`, `name`, `content`, `ttl`,
/// with `proxied` omitted entirely when `None` (TXT records carry no proxy
/// flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecordSpec {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

/// Identity of an existing provider-side record, as returned by a list call
/// and consumed by a delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHandle {
    pub id: String,
    pub name: String,
}
