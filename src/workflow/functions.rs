// Standard library
use std::collections::BTreeMap;

// Project imports
use crate::providers::DnsRecordSpec;
use crate::registry::IntegrationTemplate;

// Current module imports
use super::errors::IntegrationError;

/// Normalizes a requested subdomain into its store key.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates a normalized subdomain key: lowercase alphanumeric segments
/// separated by single hyphens, no leading or trailing hyphen.
pub fn is_valid_key(key: &str) -> bool {
    let mut boundary = true; // at the start, or right after a hyphen
    for c in key.chars() {
        match c {
            'a'..='z' | '0'..='9' => boundary = false,
            '-' if !boundary => boundary = true,
            _ => return false,
        }
    }
    !key.is_empty() && !boundary
}

/// Instantiates one integration template into a provider record payload.
///
/// The record name comes from a caller-supplied field or from the template,
/// with a trailing `.{base_domain}` stripped from template-derived names
/// because the provider expects zone-relative names. Content prefers the
/// caller's field value over the literal; TXT payloads are wrapped in
/// literal quotes and carry no proxy flag.
pub fn build_record_spec(
    template: &IntegrationTemplate,
    key: &str,
    base_domain: &str,
    fields: &BTreeMap<String, String>,
) -> Result<DnsRecordSpec, IntegrationError> {
    let name: String = match (&template.name_field, &template.name_template) {
        (Some(field), _) => fields
            .get(field)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| IntegrationError::MissingField(field.clone()))?,
        (None, Some(name_template)) => {
            let rendered = name_template.render(key, base_domain);
            let suffix = format!(".{}", base_domain);
            match rendered.strip_suffix(&suffix) {
                Some(relative) => relative.to_string(),
                None => rendered,
            }
        }
        // Registry validation guarantees one source is present.
        (None, None) => return Err(IntegrationError::MissingContent),
    };

    let content: String = template
        .content_field
        .as_ref()
        .and_then(|field| fields.get(field))
        .filter(|v| !v.is_empty())
        .cloned()
        .or_else(|| template.content.clone())
        .ok_or(IntegrationError::MissingContent)?;

    let is_txt = template.record_type == "TXT";
    Ok(DnsRecordSpec {
        record_type: template.record_type.clone(),
        name,
        content: if is_txt {
            format!("\"{}\"", content)
        } else {
            content
        },
        ttl: template.ttl,
        proxied: if is_txt { None } else { Some(template.proxied) },
    })
}
