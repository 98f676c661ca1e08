use std::time::Duration;

/// Default backend base URL for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Default transport timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
///
/// | Env Var             | Default                  |
/// |---------------------|--------------------------|
/// | `API_BASE`          | `http://localhost:3000`  |
/// | `HTTP_TIMEOUT_SECS` | `30`                     |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL prefixed to `/trainData`.
    pub api_base: String,
    /// Transport timeout applied to every request.
    pub http_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_base = std::env::var("API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            api_base,
            http_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
