/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SUBGATE_CONFIG_PATH";

/// Prefix for environment variable overrides (`SUBGATE_LOG__LEVEL=debug`).
pub const ENV_PREFIX: &str = "SUBGATE";

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Data document directory. Holds the record store (domains.json) and the
# static registries (usages.json, settings.json, captcha.json).
[data]
dir = "data"
"#;

/// Record store document, relative to the data directory.
pub const DOMAINS_FILE: &str = "domains.json";

/// Usage registry document, relative to the data directory.
pub const USAGES_FILE: &str = "usages.json";

/// Per-base-domain provider settings document, relative to the data directory.
pub const PROVIDER_SETTINGS_FILE: &str = "settings.json";

/// Captcha secret document, relative to the data directory.
pub const CAPTCHA_FILE: &str = "captcha.json";
