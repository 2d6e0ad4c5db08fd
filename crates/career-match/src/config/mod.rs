use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::sectors::{DEFAULT_ROW_TOLERANCE, DEFAULT_TOP_N};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub sectors: SectorSettings,
    pub ranking: RankingConfig,
    pub questions: QuestionBankConfig,
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

        let row_tolerance = match env::var("APP_SECTOR_ROW_TOLERANCE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or(ConfigError::InvalidTolerance { value: raw })?,
            Err(_) => DEFAULT_ROW_TOLERANCE,
        };

        let top_n = match env::var("APP_RANKING_TOP_N") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidTopN { value: raw })?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            sectors: SectorSettings {
                catalog_path: path_var(
                    "APP_SECTOR_CATALOG_PATH",
                    "config/sectors/sector_catalog.json",
                ),
                gates_path: path_var("APP_SECTOR_GATES_PATH", "config/sectors/sector_gates.json"),
                weights_path: path_var(
                    "APP_SECTOR_WEIGHTS_PATH",
                    "config/sectors/sector_weights.json",
                ),
                row_tolerance,
            },
            ranking: RankingConfig::new(top_n),
            questions: QuestionBankConfig {
                path: path_var(
                    "APP_QUESTION_BANK_PATH",
                    "config/questions/question_bank.json",
                ),
            },
        })
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
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

/// Tracing controls. Colored output is limited to local development.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Locations of the sector tables and the weight-row sum tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSettings {
    pub catalog_path: PathBuf,
    pub gates_path: PathBuf,
    pub weights_path: PathBuf,
    pub row_tolerance: f64,
}

impl SectorSettings {
    /// Standard file names under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            catalog_path: dir.join("sector_catalog.json"),
            gates_path: dir.join("sector_gates.json"),
            weights_path: dir.join("sector_weights.json"),
            row_tolerance: DEFAULT_ROW_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    pub top_n: usize,
}

impl RankingConfig {
    /// A shortlist always holds at least one sector.
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n: top_n.max(1),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBankConfig {
    pub path: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTolerance { value: String },
    InvalidTopN { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTolerance { value } => write!(
                f,
                "APP_SECTOR_ROW_TOLERANCE must be a finite non-negative number, got '{value}'"
            ),
            ConfigError::InvalidTopN { value } => write!(
                f,
                "APP_RANKING_TOP_N must be an unsigned integer, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTolerance { .. }
            | ConfigError::InvalidTopN { .. } => None,
        }
    }
}
