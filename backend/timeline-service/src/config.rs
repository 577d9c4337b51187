/// Configuration management for Timeline Service
///
/// Loads configuration from environment variables.
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Micropost and feed limits
    pub timeline: TimelineConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    #[serde(rename = "app_env", default = "default_env")]
    pub env: String,
    /// Server host to bind to
    #[serde(rename = "app_host", default = "default_host")]
    pub host: String,
    /// HTTP port
    #[serde(rename = "port", default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Maximum micropost length in characters
    #[serde(rename = "micropost_max_length", default = "default_max_content_length")]
    pub max_content_length: usize,
    /// Feed entries per page
    #[serde(rename = "feed_page_size", default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            max_content_length: default_max_content_length(),
            page_size: default_page_size(),
        }
    }
}

// Default values
fn default_env() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8010
}

fn default_max_content_length() -> usize {
    140
}

fn default_page_size() -> usize {
    30
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of `(NAME, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        // envy lowercases variable names, so serde renames are lowercase too
        let app: AppConfig = envy::from_iter(vars.clone())
            .context("Failed to read application settings from environment")?;
        let timeline: TimelineConfig = envy::from_iter(vars)
            .context("Failed to read timeline settings from environment")?;

        let config = Config { app, timeline };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.timeline.max_content_length >= 1,
            "MICROPOST_MAX_LENGTH must be at least 1"
        );
        ensure!(
            self.timeline.page_size >= 1,
            "FEED_PAGE_SIZE must be at least 1"
        );
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_vars(Vec::new()).unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.http_port, 8010);
        assert_eq!(config.timeline.max_content_length, 140);
        assert_eq!(config.timeline.page_size, 30);
    }

    #[test]
    fn test_overrides_from_variables() {
        let config = Config::from_vars(vars(&[
            ("APP_ENV", "production"),
            ("PORT", "9090"),
            ("MICROPOST_MAX_LENGTH", "280"),
            ("FEED_PAGE_SIZE", "10"),
        ]))
        .unwrap();

        assert_eq!(config.app.env, "production");
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.timeline.max_content_length, 280);
        assert_eq!(config.timeline.page_size, 10);
    }

    #[test]
    fn test_unparsable_port_is_an_error() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn test_zero_page_size_from_variables_rejected() {
        assert!(Config::from_vars(vars(&[("FEED_PAGE_SIZE", "0")])).is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = Config {
            app: AppConfig {
                env: default_env(),
                host: default_host(),
                http_port: default_http_port(),
            },
            timeline: TimelineConfig {
                max_content_length: 140,
                page_size: 0,
            },
        };

        assert!(config.validate().is_err());
    }
}
