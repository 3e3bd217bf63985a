//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! The service carries no secrets; everything here is bind-address and
//! identification metadata.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}

impl ServiceConfig {
    /// The socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address: {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [service]
            name = "betgen"
            host = "127.0.0.1"
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.service.name, "betgen");
        assert_eq!(cfg.service.host, "127.0.0.1");
        assert_eq!(cfg.service.port, 9000);
    }

    #[test]
    fn test_host_and_port_default() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [service]
            name = "betgen"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.service.host, "0.0.0.0");
        assert_eq!(cfg.service.port, 8000);
    }

    #[test]
    fn test_bind_addr() {
        let cfg = ServiceConfig {
            name: "betgen".into(),
            host: "127.0.0.1".into(),
            port: 8000,
        };
        let addr = cfg.bind_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_bind_addr_rejects_bad_host() {
        let cfg = ServiceConfig {
            name: "betgen".into(),
            host: "not a host".into(),
            port: 8000,
        };
        assert!(cfg.bind_addr().is_err());
    }

    #[test]
    fn test_load_config_file() {
        // This test requires config.toml in the working directory, which
        // is the case when running from the repo root.
        if let Ok(cfg) = AppConfig::load("config.toml") {
            assert_eq!(cfg.service.name, "betgen");
            assert!(cfg.service.port > 0);
        }
    }
}
