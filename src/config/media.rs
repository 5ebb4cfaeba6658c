//! Media configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where stored profile pictures are served from
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Base URL prefixed to stored file names
    #[serde(default = "default_static_base_url")]
    pub static_base_url: String,
}

impl MediaConfig {
    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.static_base_url.trim_end_matches('/')
    }

    /// Validate media configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = &self.static_base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidStaticBaseUrl);
        }
        Ok(())
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            static_base_url: default_static_base_url(),
        }
    }
}

fn default_static_base_url() -> String {
    "http://localhost:8080/static".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_valid() {
        let config = MediaConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8080/static");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = MediaConfig {
            static_base_url: "https://cdn.example.com/media/".to_string(),
        };
        assert_eq!(config.base_url(), "https://cdn.example.com/media");
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        let config = MediaConfig {
            static_base_url: "cdn.example.com".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidStaticBaseUrl));
    }
}
