//! HTTP server configuration.

use std::net::{SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_host() -> String {
    "127.0.0.1".into()
}

const fn default_port() -> u16 {
    3456
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` to the first matching socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the host does not resolve.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: "server.host".into(),
            reason,
        };
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(format!("'{}': {e}", self.host)))?
            .next()
            .ok_or_else(|| invalid(format!("'{}' resolved to no address", self.host)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_loopback() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3456");
    }

    #[test]
    fn garbage_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host name".into(),
            port: 80,
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
