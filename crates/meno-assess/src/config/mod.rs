use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assessment::ScoringThresholds;

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

/// Top-level configuration for the assessment service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let thresholds_path = env::var("APP_THRESHOLDS_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig { thresholds_path },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the reviewed scoring thresholds come from.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    pub thresholds_path: Option<PathBuf>,
}

impl AssessmentConfig {
    /// Built-in thresholds unless a thresholds file is configured.
    pub fn thresholds(&self) -> Result<ScoringThresholds, ConfigError> {
        let Some(path) = &self.thresholds_path else {
            return Ok(ScoringThresholds::default());
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ThresholdsRead {
            path: path.clone(),
            source,
        })?;
        let thresholds: ScoringThresholds =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ThresholdsParse {
                path: path.clone(),
                source,
            })?;
        thresholds
            .validate()
            .map_err(ConfigError::InvalidThresholds)?;

        Ok(thresholds)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    ThresholdsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    ThresholdsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidThresholds(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::ThresholdsRead { path, .. } => {
                write!(f, "unable to read thresholds file {}", path.display())
            }
            ConfigError::ThresholdsParse { path, .. } => {
                write!(f, "thresholds file {} is not valid JSON", path.display())
            }
            ConfigError::InvalidThresholds(reason) => {
                write!(f, "invalid scoring thresholds: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidThresholds(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ThresholdsRead { source, .. } => Some(source),
            ConfigError::ThresholdsParse { source, .. } => Some(source),
        }
    }
}
