use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "webworker.yaml";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SERVER_HEADER: &str = "Jon's very own server";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound on waiting for the request head. `None` waits forever.
    pub read_timeout_secs: Option<u64>,
}

/// Where requested paths are looked up and how the server names itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix joined to the requested path, so `/index.html` becomes `./index.html`.
    pub document_root: String,
    pub server_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            read_timeout_secs: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            document_root: ".".to_string(),
            server_header: DEFAULT_SERVER_HEADER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Loads the YAML file named by `WEBWORKER_CONFIG` (or `webworker.yaml`),
    /// falling back to defaults when it does not exist. `LISTEN` overrides
    /// the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("WEBWORKER_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_yaml(&contents)
                .with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read config file {path}"));
            }
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
