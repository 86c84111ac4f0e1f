// ============================================================================
// CONFIG - Compile-time configuration (option_env! + .env via build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub login_placeholder_password: String,
    pub demo_config: DemoConfig,
}

/// Ports shown in the demo panel hints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub composite_service_port: u16,
    pub user_service_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            login_placeholder_password: "demo".to_string(),
            demo_config: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            composite_service_port: 3002,
            user_service_port: 3001,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            login_placeholder_password: option_env!("LOGIN_PLACEHOLDER_PASSWORD")
                .map(str::to_string)
                .unwrap_or(defaults.login_placeholder_password),
            demo_config: DemoConfig {
                composite_service_port: option_env!("COMPOSITE_SERVICE_PORT")
                    .unwrap_or("3002").parse().unwrap_or(3002),
                user_service_port: option_env!("USER_SERVICE_PORT")
                    .unwrap_or("3001").parse().unwrap_or(3001),
            },
        }
    }

    /// API prefix without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Level for wasm-logger; logging disabled still keeps warnings and errors
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = AppConfig {
            api_base_url: "http://localhost:5000/api/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn disabled_logging_keeps_warnings() {
        let config = AppConfig {
            enable_logging: false,
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
