use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the reporting subsystem.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub reports: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_domain = env::var("API_DOMAIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        if api_domain.trim().is_empty() {
            return Err(ConfigError::EmptyApiDomain);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            reports: ReportConfig { api_domain },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings consumed by the delivery pipeline when it builds export links.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub api_domain: String,
}

impl ReportConfig {
    /// Download URL handed to the requesting user once an archive is stored.
    pub fn export_url(&self, storage_key: &str) -> String {
        format!(
            "{}/api/exports/{}",
            self.api_domain.trim_end_matches('/'),
            storage_key
        )
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyApiDomain,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyApiDomain => {
                write!(f, "API_DOMAIN must not be empty when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
