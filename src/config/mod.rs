mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

/// Verbosity of the process log. `Fatal` is kept for existing config files
/// and behaves like `Error`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Fatal | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: Option<u16>,
    pub log_level: LogLevel,
    pub logging_level: RequestsLoggingLevel,
    pub max_body_bytes: usize,
    pub max_artist_body_bytes: usize,
    pub request_timeout_sec: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            metrics_port: None,
            log_level: LogLevel::Info,
            logging_level: RequestsLoggingLevel::Path,
            max_body_bytes: 1024,
            max_artist_body_bytes: 1 << 20,
            request_timeout_sec: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: Option<u16>,
    pub log_level: LogLevel,
    pub logging_level: RequestsLoggingLevel,
    pub max_body_bytes: usize,
    pub max_artist_body_bytes: usize,
    pub request_timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.or(cli.metrics_port);

        let log_level = match file.log_level {
            Some(s) => match parse_log_level(&s) {
                Some(level) => level,
                None => bail!("Invalid log level: {:?}", s),
            },
            None => cli.log_level,
        };

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging level: {:?}", s),
            },
            None => cli.logging_level.clone(),
        };

        let max_body_bytes = file.max_body_bytes.unwrap_or(cli.max_body_bytes);
        if max_body_bytes == 0 {
            bail!("max_body_bytes must be greater than zero");
        }

        let max_artist_body_bytes = file
            .max_artist_body_bytes
            .unwrap_or(cli.max_artist_body_bytes);
        if max_artist_body_bytes == 0 {
            bail!("max_artist_body_bytes must be greater than zero");
        }

        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);
        if request_timeout_sec == 0 {
            bail!("request_timeout_sec must be greater than zero");
        }

        if metrics_port == Some(port) {
            bail!("metrics_port must differ from port ({})", port);
        }

        Ok(Self {
            host,
            port,
            metrics_port,
            log_level,
            logging_level,
            max_body_bytes,
            max_artist_body_bytes,
            request_timeout_sec,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            host: self.host.clone(),
            port: self.port,
            max_body_bytes: self.max_body_bytes,
            max_artist_body_bytes: self.max_artist_body_bytes,
            request_timeout: Duration::from_secs(self.request_timeout_sec),
        }
    }
}

/// Parses a log level name, ignoring case.
fn parse_log_level(s: &str) -> Option<LogLevel> {
    LogLevel::from_str(s, true).ok()
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
