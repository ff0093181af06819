#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::paginator::DEFAULT_PAGE_SIZE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_route_prefix, validate_timeout_secs, validate_url,
    Validate,
};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://freecoursehive-be.onrender.com/api/courses";
pub const DEFAULT_DETAIL_ROUTE_PREFIX: &str = "/detail";

/// Settings the catalog runs with after file and flag values are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub page_size: usize,
    pub detail_route_prefix: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            detail_route_prefix: DEFAULT_DETAIL_ROUTE_PREFIX.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Layers the values a TOML file sets on top of the current ones.
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(endpoint) = &file.source.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(timeout) = file.source.timeout_seconds {
            self.request_timeout_secs = Some(timeout);
        }
        if let Some(page_size) = file.display.page_size {
            self.page_size = page_size;
        }
        if let Some(prefix) = &file.display.detail_route_prefix {
            self.detail_route_prefix = prefix.clone();
        }
        self
    }
}

impl ConfigProvider for AppConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn detail_route_prefix(&self) -> &str {
        &self.detail_route_prefix
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        validate_route_prefix("detail_route_prefix", &self.detail_route_prefix)?;
        if let Some(timeout) = self.request_timeout_secs {
            validate_timeout_secs("request_timeout_secs", timeout)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_file_overrides_only_set_values() {
        let file = TomlConfig::from_toml_str(
            "[source]\ntimeout_seconds = 5\n[display]\npage_size = 3\n",
        )
        .unwrap();

        let config = AppConfig::default().merge_file(&file);

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.detail_route_prefix, "/detail");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let mut config = AppConfig::with_endpoint("not a url");
        assert!(config.validate().is_err());

        config.endpoint = DEFAULT_ENDPOINT.to_string();
        config.page_size = 0;
        assert!(config.validate().is_err());

        config.page_size = 12;
        config.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config.request_timeout_secs = Some(1 << 32);
        assert!(config.validate().is_ok());
    }
}
