//! Client configuration.
//!
//! The frontend is a static bundle, so the backend URL is resolved once from
//! the build environment:
//!
//! - `SHOPFLOW_BACKEND_URL` - backend base URL (default: `http://localhost:8000`)

use crate::DEFAULT_BACKEND_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Creates a config for the given base URL, dropping any trailing `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads `SHOPFLOW_BACKEND_URL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("SHOPFLOW_BACKEND_URL"))
    }

    /// Uses `value` unless it is missing or blank.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path; the path is appended verbatim.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend() {
        assert_eq!(ClientConfig::resolve(None).base_url(), "http://localhost:8000");
        assert_eq!(ClientConfig::resolve(Some("  ")).base_url(), "http://localhost:8000");
        assert_eq!(ClientConfig::default(), ClientConfig::resolve(None));
    }

    #[test]
    fn test_configured_backend() {
        let config = ClientConfig::resolve(Some("https://api.example.com/"));
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.url("/stores"), "https://api.example.com/stores");
    }

    #[test]
    fn test_path_appended_verbatim() {
        let config = ClientConfig::default();
        assert_eq!(
            config.url("/stores/s1/orders?status=paid"),
            "http://localhost:8000/stores/s1/orders?status=paid"
        );
    }
}
