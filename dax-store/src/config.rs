//! Configuration for the store connection.

use crate::error::StoreError;
use serde::Deserialize;
use std::time::Duration;

fn default_connect_timeout() -> u64 { 10 }
fn default_operation_timeout() -> u64 { 5 }

/// Connection parameters for a remote key-value store.
///
/// Identity is value-based: two configs comparing equal describe the same
/// endpoint. `password` may be empty for stores running without
/// authentication.
///
/// Can be deserialized from `application.yaml`; `host` and `port` are
/// required, everything else has defaults.
///
/// ```yaml
/// store:
///   host: "192.168.0.101"
///   port: 6379
///   password: "secret"           # default: "" (no auth)
///   connect_timeout_secs: 10     # default: 10
///   operation_timeout_secs: 5    # default: 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Host name or address of the store.
    pub host: String,
    /// TCP port. Must be non-zero.
    pub port: u16,
    /// Credential presented at connect time. Empty means no-auth mode.
    #[serde(default)]
    pub password: String,
    /// Connect timeout in seconds. Default: 10.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Per-operation timeout in seconds. Default: 5.
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout_secs: u64,
}

impl StoreConfig {
    /// Create a configuration for the given endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use dax_store::StoreConfig;
    ///
    /// let config = StoreConfig::new("192.168.0.101", 6379, "secret");
    /// ```
    pub fn new(host: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            password: password.into(),
            connect_timeout_secs: 10,
            operation_timeout_secs: 5,
        }
    }

    /// Set the connect timeout in seconds.
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set the per-operation timeout in seconds.
    pub fn with_operation_timeout(mut self, secs: u64) -> Self {
        self.operation_timeout_secs = secs;
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.host.is_empty() {
            return Err(StoreError::InvalidConfig("host cannot be empty".into()));
        }
        if self.port == 0 {
            return Err(StoreError::InvalidConfig("port cannot be zero".into()));
        }
        Ok(())
    }
}
