use serde::Deserialize;

use crate::shared::api_utils::api_base;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, on `port`"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_collection")]
    pub collection: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_collection() -> String {
    "api/v1/categories".to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

fn default_timeout_ms() -> u32 {
    4000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
collection = "api/v1/categories"

[logging]
level = "debug"

[notifications]
timeout_ms = 4000
"#;

/// Build-time override for `api.base_url`
const API_BASE_OVERRIDE: Option<&str> = option_env!("CATEGORY_ADMIN_API_BASE");

/// Load configuration
///
/// Search order:
/// 1. Embedded default config
/// 2. `CATEGORY_ADMIN_API_BASE` set at build time replaces `api.base_url`
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        config.api.base_url = base.trim().to_string();
    }
    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.api.collection.trim_matches('/').is_empty() {
        anyhow::bail!("api.collection must not be empty");
    }
    Ok(config)
}

impl AppConfig {
    /// Effective base URL of the backend
    pub fn api_base(&self) -> String {
        if self.api.base_url.is_empty() {
            api_base(self.api.port)
        } else {
            self.api.base_url.trim_end_matches('/').to_string()
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.collection, "api/v1/categories");
        assert_eq!(config.notifications.timeout_ms, 4000);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://shop.example.com/\"\n").unwrap();
        assert_eq!(config.api.collection, "api/v1/categories");
        assert_eq!(config.notifications, NotificationsConfig::default());
        assert_eq!(config.api_base(), "https://shop.example.com");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = parse_config("[api]\n[logging]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_empty_collection_is_rejected() {
        assert!(parse_config("[api]\ncollection = \"/\"\n").is_err());
    }

    #[test]
    fn test_missing_api_section_is_an_error() {
        assert!(parse_config("[logging]\nlevel = \"warn\"\n").is_err());
    }
}
