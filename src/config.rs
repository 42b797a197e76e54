//! Viewer configuration
//!
//! Settings can come from a YAML file; anything not set there takes its
//! default. The CLI applies its own flags on top.
//!
//! ```yaml
//! endpoint: https://api.spacexdata.com/v5/launches/query
//! page_size: 10
//! timeout_secs: 30
//! ordering: latest-wins
//! headers:
//!   X-Client: launch-viewer
//! ```

use crate::controller::FetchOrdering;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::DEFAULT_LIMIT;
use crate::provider::{HttpLaunchProvider, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Launch query endpoint
    pub endpoint: String,

    /// Launches per page
    pub page_size: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent override
    pub user_agent: Option<String>,

    /// Policy for overlapping fetches
    pub ordering: FetchOrdering,

    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_LIMIT,
            timeout_secs: 30,
            user_agent: None,
            ordering: FetchOrdering::default(),
            headers: HashMap::new(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(self.timeout());
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }

    /// Build the HTTP provider this config describes
    pub fn provider(&self) -> Result<HttpLaunchProvider> {
        let client = HttpClient::with_config(self.http_config())?;
        Ok(HttpLaunchProvider::new(client, &self.endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();
        assert_ok!(config.validate());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.ordering, FetchOrdering::LatestWins);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ViewerConfig::from_yaml_str("page_size: 25\n").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
endpoint: http://localhost:8080/v5/launches/query
page_size: 5
timeout_secs: 3
user_agent: viewer-test/1.0
ordering: last-resolved-wins
headers:
  X-Client: tests
";
        let config = ViewerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/v5/launches/query");
        assert_eq!(config.ordering, FetchOrdering::LastResolvedWins);

        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(3));
        assert_eq!(http.user_agent, "viewer-test/1.0");
        assert_eq!(http.default_headers.get("X-Client"), Some(&"tests".to_string()));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ViewerConfig::from_yaml_str("page_size: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "page_size"));

        let err = ViewerConfig::from_yaml_str("endpoint: not a url\n").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ViewerConfig::from_yaml_str("endpoint: ftp://example.com/launches\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "endpoint"));

        assert_err!(ViewerConfig::from_yaml_str("pagesize: 10\n"));
        assert_err!(ViewerConfig::from_yaml_str("ordering: random\n"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size: 20").unwrap();

        let config = ViewerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_provider_uses_endpoint() {
        let config = ViewerConfig::default();
        let provider = config.provider().unwrap();
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
    }
}
