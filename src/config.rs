//! Application Configuration
//!
//! Baked in at build time (`GROCERY_API_URL=... trunk build`), since the app
//! runs entirely in the browser.

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the `/items` resource
    pub api_url: &'static str,
    /// Wait before the initial load; 0 loads immediately
    pub load_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL,
            load_delay_ms: 0,
        }
    }
}

impl AppConfig {
    /// Configuration from the environment of the build
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("GROCERY_API_URL"), option_env!("GROCERY_LOAD_DELAY_MS"))
    }

    fn from_values(api_url: Option<&'static str>, load_delay_ms: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        let load_delay_ms = match load_delay_ms.map(str::trim) {
            None | Some("") => 0,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid GROCERY_LOAD_DELAY_MS {:?}, loading immediately", raw);
                0
            }),
        };

        Self { api_url, load_delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
        assert_eq!(AppConfig::default().api_url, "http://localhost:3000");
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_values(Some("https://lists.example.com"), Some("2000"));
        assert_eq!(config.api_url, "https://lists.example.com");
        assert_eq!(config.load_delay_ms, 2000);
    }

    #[test]
    fn test_blank_or_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("soon"));
        assert_eq!(config, AppConfig::default());
    }
}
