use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Remote service the forms submit to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Scheme, host and optional port (e.g., "https://forms.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Client-side submission behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// How long the success flag stays raised, in milliseconds (default: 3000).
    #[serde(default = "default_success_flash_ms")]
    pub success_flash_ms: u64,
}

fn default_base_url() -> String {
    "https://mathankumar-msc.onrender.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_success_flash_ms() -> u64 {
    3000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            success_flash_ms: default_success_flash_ms(),
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    /// Absolute URL for `endpoint` (e.g. "/login").
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl SubmissionConfig {
    pub fn success_flash(&self) -> Duration {
        Duration::from_millis(self.success_flash_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_single_slash() {
        let mut service = ServiceConfig::default();
        service.base_url = "http://127.0.0.1:9000/".to_string();
        assert_eq!(service.endpoint_url("/login"), "http://127.0.0.1:9000/login");
        assert_eq!(service.endpoint_url("register"), "http://127.0.0.1:9000/register");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[service]
base_url = "http://localhost:3000"
"#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "http://localhost:3000");
        assert_eq!(config.service.timeout_seconds, 30);
        assert_eq!(config.submission.success_flash_ms, 3000);
    }
}
