//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on. Default: 0.0.0.0:8000.
    pub bind_addr: Option<String>,
}

impl ServerConfig {
    /// Returns the effective bind address.
    pub fn effective_bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }
}
