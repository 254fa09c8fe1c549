use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::account_opening::risk::{RiskRuleSet, DEFAULT_ASSESSOR};

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
    pub risk: RiskConfig,
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
        let include_targets = env::var("APP_LOG_TARGETS")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let assessed_by = env::var("RISK_ASSESSED_BY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ASSESSOR.to_string());
        let rules_path = env::var("RISK_RULES_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                include_targets,
            },
            risk: RiskConfig {
                assessed_by,
                rules_path,
            },
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
    pub include_targets: bool,
}

/// Risk engine wiring: who signs assessments and where to find an overriding rule set.
#[derive(Debug, Clone)]
pub struct RiskConfig {
    pub assessed_by: String,
    pub rules_path: Option<PathBuf>,
}

impl RiskConfig {
    /// Load the rule set from `rules_path`, or the built-in defaults when unset.
    pub fn load_rules(&self) -> Result<RiskRuleSet, ConfigError> {
        match &self.rules_path {
            Some(path) => load_rules_from(path.clone()),
            None => Ok(RiskRuleSet::default()),
        }
    }
}

pub fn load_rules_from(path: PathBuf) -> Result<RiskRuleSet, ConfigError> {
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::RulesUnreadable {
        path: path.clone(),
        source,
    })?;
    let rules: RiskRuleSet = serde_json::from_str(&raw).map_err(|source| {
        ConfigError::RulesInvalid {
            path: path.clone(),
            source,
        }
    })?;

    match rules.first_blank_entry() {
        Some(list) => Err(ConfigError::RulesBlankEntry { path, list }),
        None => Ok(rules),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    RulesUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    RulesInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },
    RulesBlankEntry {
        path: PathBuf,
        list: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::RulesUnreadable { path, .. } => {
                write!(f, "unable to read risk rules from {}", path.display())
            }
            ConfigError::RulesInvalid { path, source } => {
                write!(f, "invalid risk rules in {}: {}", path.display(), source)
            }
            ConfigError::RulesBlankEntry { path, list } => {
                write!(f, "risk rules in {} contain a blank entry in {list}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::RulesUnreadable { source, .. } => Some(source),
            ConfigError::RulesInvalid { source, .. } => Some(source),
            ConfigError::RulesBlankEntry { .. } => None,
        }
    }
}
