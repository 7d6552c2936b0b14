//! Gateway configuration loaded from environment variables.

/// Environment variable selecting the API origin.
pub const ENV_BASE_URL: &str = "QABUL_API_BASE_URL";

/// Configuration errors surfaced directly to the user.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is not configured; no request can be made.
    #[error("إعدادات الاتصال بالخادم غير مكتملة")]
    MissingBaseUrl,
}

/// Connection settings for the remote API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API origin without a trailing slash, e.g. `https://api.example.edu`.
    pub base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from `QABUL_API_BASE_URL`. Absence is an error
    /// reported to the user, not a panic.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(ENV_BASE_URL) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(ConfigError::MissingBaseUrl),
        }
    }
}
