//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The listen address itself comes from Leptos (`LEPTOS_SITE_ADDR` or
//! `[package.metadata.leptos]`).

use super::content::DEFAULT_SITE_URL;

/// Configuration problems detected at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_URL must be an absolute http(s) URL, got '{0}'")]
    InvalidSiteUrl(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Public URL of the site, used for canonical and Open Graph tags
    /// Example: https://novack.security
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL").ok(),
        }
    }

    /// Check if a site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Check the configured values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.site_url {
            let rest = url
                .strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"));
            if rest.is_none_or(|host| host.trim_end_matches('/').is_empty()) {
                return Err(ConfigError::InvalidSiteUrl(url.clone()));
            }
        }
        Ok(())
    }

    /// Site URL without a trailing slash, falling back to the default
    pub fn site_url(&self) -> &str {
        self.site_url
            .as_deref()
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Struct-level tests only; no env var mutation so they stay thread safe

    #[test]
    fn test_config_with_site_url() {
        let config = Config {
            site_url: Some("https://demo.novack.security/".to_string()),
        };

        assert!(config.has_site_url());
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.site_url(), "https://demo.novack.security");
    }

    #[test]
    fn test_config_without_site_url_uses_default() {
        let config = Config::default();

        assert!(!config.has_site_url());
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_http_url_is_accepted() {
        let config = Config {
            site_url: Some("http://localhost:3000".to_string()),
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let config = Config {
            site_url: Some("novack.security".to_string()),
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSiteUrl("novack.security".to_string()))
        );
    }

    #[test]
    fn test_scheme_without_host_is_rejected() {
        let config = Config {
            site_url: Some("https:///".to_string()),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::InvalidSiteUrl("ftp://x".to_string());
        assert_eq!(
            err.to_string(),
            "SITE_URL must be an absolute http(s) URL, got 'ftp://x'"
        );
    }

    #[test]
    fn test_config_from_env_site_url_is_normalized() {
        // Reads whatever the environment holds without mutating it
        let config = Config::from_env();
        let site_url = config.site_url();

        assert!(!site_url.ends_with('/'));
        assert_eq!(config.has_site_url(), std::env::var("SITE_URL").is_ok());
        if !config.has_site_url() {
            assert_eq!(site_url, DEFAULT_SITE_URL);
        }
    }
}
