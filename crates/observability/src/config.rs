//! Configuration for logging and trace export

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "ideagen";

/// Level used when neither the config nor the environment names one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to exported spans
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Service version (optional)
    #[serde(default)]
    pub service_version: Option<String>,

    /// OTLP endpoint for trace export (e.g., "http://localhost:4317")
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Write formatted log lines to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Filter directive (e.g., "info", "ideagen_core=debug")
    #[serde(default)]
    pub log_level: Option<String>,

    /// Additional resource attributes (key-value pairs)
    #[serde(default)]
    pub resource_attributes: Vec<(String, String)>,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
            resource_attributes: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_resource_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.resource_attributes.push((key.into(), value.into()));
        self
    }

    /// Filter directive the subscriber will use.
    pub fn filter_directive(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` → service_name
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint
    /// - `IDEAGEN_LOG`, then `OTEL_LOG_LEVEL`, then `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| default_service_name());

        // OTLP stays off unless explicitly requested; a CLI should not dial out by default.
        let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let log_level = std::env::var("IDEAGEN_LOG")
            .or_else(|_| std::env::var("OTEL_LOG_LEVEL"))
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            service_name,
            service_version: None,
            otlp_endpoint,
            enable_console: true,
            log_level,
            resource_attributes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_warn() {
        let config = ObservabilityConfig::new("ideagen");
        assert_eq!(config.filter_directive(), "warn");

        let blank = ObservabilityConfig::new("ideagen").with_log_level("  ");
        assert_eq!(blank.filter_directive(), "warn");
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ObservabilityConfig::new("ideagen-cli")
            .with_version("1.2.3")
            .with_log_level("ideagen_core=debug")
            .with_console(false)
            .with_resource_attribute("deployment", "local");

        assert_eq!(config.service_name, "ideagen-cli");
        assert_eq!(config.service_version.as_deref(), Some("1.2.3"));
        assert_eq!(config.filter_directive(), "ideagen_core=debug");
        assert!(!config.enable_console);
        assert_eq!(config.resource_attributes.len(), 1);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ObservabilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert!(config.enable_console);
        assert!(config.otlp_endpoint.is_none());
    }
}
