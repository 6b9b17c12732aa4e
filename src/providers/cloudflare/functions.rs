// 3rd party crates
use reqwest::header::HeaderValue;

// Project imports
use crate::registry::ProviderCredentials;

// Current module imports
use super::errors::CloudflareError;
use super::types::ApiError;

/// Builds the bearer Authorization header for one zone's token.
///
/// Marked `set_sensitive` so the token never shows up in debug output.
pub(super) fn auth_header(creds: &ProviderCredentials) -> Result<HeaderValue, CloudflareError> {
    if creds.api_token.is_empty() {
        return Err(CloudflareError::InvalidApiToken(creds.zone_id.clone()));
    }

    let bearer_token: String = format!("Bearer {}", creds.api_token);
    let mut auth_value: HeaderValue =
        HeaderValue::from_str(&bearer_token).map_err(CloudflareError::InvalidHeaderValue)?;
    auth_value.set_sensitive(true);
    Ok(auth_value)
}

/// Flattens the envelope's error list into one message.
pub(super) fn join_api_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "Unknown error".to_string();
    }
    errors
        .iter()
        .map(|e| format!("{} ({})", e.message, e.code))
        .collect::<Vec<_>>()
        .join("; ")
}
