//! Application configuration management

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result, bail};

use crate::services::pubsub::DEFAULT_CAPACITY;

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Per-topic capacity of the subscription broker
    pub broadcast_capacity: usize,

    /// Console log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 4000,
            broadcast_capacity: DEFAULT_CAPACITY,
            log_format: LogFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(v) => v.parse().with_context(|| format!("Invalid HOST: {}", v))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
            None => defaults.port,
        };

        let broadcast_capacity = match lookup("BROADCAST_CAPACITY") {
            Some(v) => v
                .parse()
                .with_context(|| format!("Invalid BROADCAST_CAPACITY: {}", v))?,
            None => defaults.broadcast_capacity,
        };
        if broadcast_capacity == 0 {
            bail!("BROADCAST_CAPACITY must be greater than zero");
        }

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => LogFormat::from_arg(&v)
                .with_context(|| format!("Invalid LOG_FORMAT: {} (expected json or pretty)", v))?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            broadcast_capacity,
            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.broadcast_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("BROADCAST_CAPACITY", "16"),
            ("LOG_FORMAT", "pretty"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.broadcast_capacity, 16);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("HOST", "localhost:80")]).is_err());
        assert!(load(&[("BROADCAST_CAPACITY", "0")]).is_err());
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
