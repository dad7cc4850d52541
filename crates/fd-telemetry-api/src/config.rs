//! Telemetry service configuration.
//!
//! Loaded once at startup; handlers only ever see the resolved snapshot.

use fd_protocol::NodeIdentity;

use crate::error::ConfigError;

pub const NODE_NAME_VAR: &str = "NODE_NAME";
pub const APP_VERSION_VAR: &str = "APP_VERSION";
pub const HOST_VAR: &str = "TELEMETRY_HOST";
pub const PORT_VAR: &str = "TELEMETRY_PORT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Top-level service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Replica identity (`NODE_NAME`), resolved by [`ServiceConfig::identity`].
    pub node_name: Option<String>,
    /// Deployed version (`APP_VERSION`).
    pub app_version: Option<String>,
}

impl ServiceConfig {
    /// Load config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(raw) = lookup(PORT_VAR).filter(|p| !p.is_empty()) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    value: raw.clone(),
                    source,
                })?;
        }
        config.node_name = lookup(NODE_NAME_VAR);
        config.app_version = lookup(APP_VERSION_VAR);

        Ok(config)
    }

    /// `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Identity stamped onto every telemetry record.
    pub fn identity(&self) -> NodeIdentity {
        NodeIdentity::new(self.node_name.clone(), self.app_version.clone())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            node_name: None,
            app_version: None,
        }
    }
}
