//! Settings structures for the car search client

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Main settings structure, as read from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub client: ClientSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (CAR_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CAR_SEARCH_BASE_URL") {
            self.client.base_url = val;
        }
        if let Some(val) = lookup("CAR_SEARCH_SERVICE_PREFIX") {
            self.client.service_prefix = val;
        }
        if let Some(val) = lookup("CAR_SEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }
}

/// Where the search endpoint lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Gateway root URL
    pub base_url: String,
    /// Gateway route of the owning microservice
    pub service_prefix: String,
    /// Endpoint path template below the service prefix
    pub resource_path: String,
    /// Drop trailing slashes left after an absent `:id`
    pub strip_trailing_slashes: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            service_prefix: crate::search::DEFAULT_SERVICE_PREFIX.to_string(),
            resource_path: crate::search::CAR_SEARCH_PATH.to_string(),
            strip_trailing_slashes: true,
        }
    }
}

impl ClientSettings {
    /// Full resource template: service prefix joined with the resource path
    pub fn template(&self) -> String {
        let prefix = self.service_prefix.trim_matches('/');
        let path = self.resource_path.trim_start_matches('/');
        if prefix.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", prefix, path)
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

impl OutgoingSettings {
    /// Request timeout, falling back to the default for non-positive values
    /// and capped at the maximum
    pub fn timeout(&self) -> Duration {
        let secs = if self.request_timeout.is_finite() && self.request_timeout > 0.0 {
            self.request_timeout.min(crate::MAX_TIMEOUT as f64)
        } else {
            crate::DEFAULT_TIMEOUT as f64
        };
        Duration::from_secs_f64(secs)
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.client.base_url, "http://localhost:8080/");
        assert_eq!(settings.client.template(), "blogapp/api/_search/cars/:id");
        assert!(settings.client.strip_trailing_slashes);
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            r#"
client:
  base_url: https://fleet.example.com/
outgoing:
  request_timeout: 2.5
  extra_headers:
    Authorization: Bearer abc
"#,
        )
        .unwrap();

        assert_eq!(settings.client.base_url, "https://fleet.example.com/");
        assert_eq!(settings.client.service_prefix, "blogapp/");
        assert_eq!(settings.outgoing.timeout(), Duration::from_millis(2500));
        assert_eq!(
            settings.outgoing.extra_headers.get("Authorization").map(String::as_str),
            Some("Bearer abc")
        );
    }

    #[test]
    fn test_merge_vars() {
        let mut vars = HashMap::new();
        vars.insert("CAR_SEARCH_BASE_URL", "http://10.0.0.5:8080/");
        vars.insert("CAR_SEARCH_SERVICE_PREFIX", "");
        vars.insert("CAR_SEARCH_TIMEOUT", "not-a-number");

        let mut settings = Settings::default();
        settings.merge_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(settings.client.base_url, "http://10.0.0.5:8080/");
        assert_eq!(settings.client.template(), "api/_search/cars/:id");
        assert_eq!(
            settings.outgoing.request_timeout,
            crate::DEFAULT_TIMEOUT as f64
        );
    }

    #[test]
    fn test_timeout_bounds() {
        let mut outgoing = OutgoingSettings {
            request_timeout: -1.0,
            ..OutgoingSettings::default()
        };
        assert_eq!(outgoing.timeout(), Duration::from_secs(crate::DEFAULT_TIMEOUT));

        outgoing.request_timeout = 600.0;
        assert_eq!(outgoing.timeout(), Duration::from_secs(crate::MAX_TIMEOUT));
    }
}
