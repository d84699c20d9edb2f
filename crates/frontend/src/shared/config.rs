use once_cell::sync::Lazy;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix of every REST call, e.g. "/api"
    pub base_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Upper bound for the project record fetch
    pub feature_fetch_timeout_ms: u64,
    /// When the project record cannot be fetched, show the catalog/default
    /// features instead of an error
    pub substitute_defaults_on_failure: bool,
}

impl NavigationConfig {
    pub fn feature_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.feature_fetch_timeout_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/api".to_string(),
            },
            navigation: NavigationConfig {
                feature_fetch_timeout_ms: 10_000,
                substitute_defaults_on_failure: true,
            },
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[navigation]
feature_fetch_timeout_ms = 10000
substitute_defaults_on_failure = true
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| parse_config(DEFAULT_CONFIG));

/// Parses a TOML config, falling back to [`AppConfig::default`] when it is invalid.
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("invalid config, using built-in defaults: {}", e);
            AppConfig::default()
        }
    }
}

/// Process-wide configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.navigation.feature_fetch_timeout(),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_custom_config() {
        let toml_str = r#"
[api]
base_path = "/v2"

[navigation]
feature_fetch_timeout_ms = 2500
substitute_defaults_on_failure = false
"#;
        let config = parse_config(toml_str);
        assert_eq!(config.api.base_path, "/v2");
        assert_eq!(config.navigation.feature_fetch_timeout_ms, 2500);
        assert!(!config.navigation.substitute_defaults_on_failure);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = parse_config("[navigation]\nfeature_fetch_timeout_ms = \"soon\"");
        assert_eq!(config, AppConfig::default());
    }
}
