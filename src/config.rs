//! Build-time Configuration
//!
//! Values baked in through `option_env!` when the bundle is built.

/// Fallback API root when `GUIDE_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct GuideConfig {
    /// API root without trailing slash
    pub api_url: String,
    pub log_level: log::Level,
    /// How long the startup preloader stays up
    pub preloader_ms: u32,
    /// Delay between a successful registration and the jump to `/login`
    pub register_redirect_ms: u32,
    pub toast_ms: u32,
    /// Placeholder cards shown while a list loads
    pub shimmer_cards: usize,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl GuideConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("GUIDE_API_URL"), option_env!("GUIDE_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(log::Level::Info);

        Self {
            api_url,
            log_level,
            preloader_ms: 1500,
            register_redirect_ms: 1500,
            toast_ms: 3000,
            shimmer_cards: 6,
        }
    }

    /// `{api_url}/{path}/` with the trailing slash the backend expects
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/", self.api_url, path.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuideConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.shimmer_cards, 6);
    }

    #[test]
    fn test_trailing_slash_trimmed_and_level_parsed() {
        let config = GuideConfig::from_values(Some("https://guide.example/api/"), Some("debug"));
        assert_eq!(config.api_url, "https://guide.example/api");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = GuideConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_endpoint() {
        let config = GuideConfig::default();
        assert_eq!(config.endpoint("destinations"), "http://localhost:8000/api/destinations/");
        assert_eq!(config.endpoint("/check_auth/"), "http://localhost:8000/api/check_auth/");
    }
}
