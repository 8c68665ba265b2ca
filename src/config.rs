use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Top-level server configuration.
///
/// Loaded from an optional YAML file with environment overrides; every field
/// has a default so the server runs with no configuration at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFileConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to bind on all interfaces.
    pub port: u16,
    /// Pending-connection backlog handed to listen().
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFileConfig {
    /// Directory all request paths are resolved under.
    pub root: PathBuf,
    /// Default document served for the path `/`.
    pub index: String,
    /// Per-connection read/write timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFileConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            backlog: 128,
        }
    }
}

impl Default for StaticFileConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("web"),
            index: "index.html".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `STATICD_CONFIG` if set,
    /// then applies `PORT` and `STATICD_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("STATICD_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(port) = std::env::var("PORT") {
            cfg.server.port = port.parse().context("PORT must be a port number")?;
        }
        if let Ok(root) = std::env::var("STATICD_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    /// Bind address on all interfaces for the configured port.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server.port)
    }
}

impl StaticFileConfig {
    pub fn io_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
