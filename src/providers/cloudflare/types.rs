// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Client for the Cloudflare DNS records API.
///
/// Holds only the shared HTTP client; zone id and token come in with each
/// call because every base domain has its own credentials.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    pub(super) client: Client,
}

/// The `{success, errors, result}` envelope every v4 endpoint replies with.
#[derive(Debug, Deserialize)]
pub(super) struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    pub result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiError {
    pub code: i64,
    pub message: String,
}

/// Subset of a DNS record object we care about.
#[derive(Debug, Deserialize)]
pub(super) struct DnsRecordResult {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_errors_parses() {
        let response: ApiResponse<Vec<DnsRecordResult>> = serde_json::from_str(
            r#"{
                "success": false,
                "errors": [{"code": 10000, "message": "Authentication error"}],
                "result": null
            }"#,
        )
        .unwrap();
        assert!(!response.success);
        assert_eq!(response.errors[0].code, 10000);
        assert!(response.result.is_none());
    }

    #[test]
    fn record_list_parses() {
        let response: ApiResponse<Vec<DnsRecordResult>> = serde_json::from_str(
            r#"{
                "success": true,
                "errors": [],
                "result": [
                    {"id": "r1", "name": "docs.example.com", "type": "CNAME", "ttl": 3600}
                ]
            }"#,
        )
        .unwrap();
        let records = response.result.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "r1");
        assert_eq!(records[0].name, "docs.example.com");
    }
}
