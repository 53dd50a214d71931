use anyhow::Context;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::logging::LogConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_host: IpAddr,
    pub api_port: u16,
    pub logging: LogConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_host = parse_var("API_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let api_port = parse_var("API_PORT", 5000u16)?;

        let defaults = LogConfig::default();
        let logging = LogConfig {
            dir: env::var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            file_name: env::var("LOG_FILE").unwrap_or(defaults.file_name),
            max_bytes: parse_var("LOG_MAX_BYTES", defaults.max_bytes)?,
            max_backups: parse_var("LOG_BACKUPS", defaults.max_backups)?,
            console: parse_var("LOG_CONSOLE", defaults.console)?,
        };

        Ok(Self {
            api_host,
            api_port,
            logging,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.api_host, self.api_port)
    }
}

/// Reads `name` from the environment, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
