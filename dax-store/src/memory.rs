//! In-memory store backend.
//!
//! [`InMemoryConnector`] models a fake server: the keyspace lives in the
//! connector and outlives individual connections, so a client can
//! connect, write, close, and a later client sees the written state.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::transport::{StoreConnector, StoreTransport};
use bytes::Bytes;
use dashmap::DashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

type Keyspace = DashMap<(u32, String), Bytes>;

/// Connector handing out [`InMemoryTransport`] connections over shared
/// state.
#[derive(Clone, Default)]
pub struct InMemoryConnector {
    state: Arc<Keyspace>,
    password: Option<String>,
    connect_delay: Option<Duration>,
    latency: Option<Duration>,
}

impl InMemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require this password at connect time.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Delay connection establishment by `delay`.
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = Some(delay);
        self
    }

    /// Delay every get/set by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Direct access to a stored value, bypassing any connection.
    pub fn value(&self, db: u32, key: &str) -> Option<Bytes> {
        self.state.get(&(db, key.to_string())).map(|e| e.value().clone())
    }
}

impl StoreConnector for InMemoryConnector {
    fn connect<'a>(
        &'a self,
        config: &'a StoreConfig,
    ) -> Pin<Box<dyn Future<Output = Result<Box<dyn StoreTransport>, StoreError>> + Send + 'a>>
    {
        Box::pin(async move {
            if let Some(delay) = self.connect_delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(expected) = &self.password {
                if config.password != *expected {
                    return Err(StoreError::AuthenticationFailed(format!(
                        "invalid credential for {}:{}",
                        config.host, config.port
                    )));
                }
            }
            Ok(Box::new(InMemoryTransport {
                state: Arc::clone(&self.state),
                latency: self.latency,
            }) as Box<dyn StoreTransport>)
        })
    }
}

/// One in-memory connection; see [`InMemoryConnector`].
pub struct InMemoryTransport {
    state: Arc<Keyspace>,
    latency: Option<Duration>,
}

impl InMemoryTransport {
    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl StoreTransport for InMemoryTransport {
    fn get<'a>(
        &'a self,
        db: u32,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Bytes>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            self.simulate_latency().await;
            Ok(self.state.get(&(db, key.to_string())).map(|e| e.value().clone()))
        })
    }

    fn set<'a>(
        &'a self,
        db: u32,
        key: &'a str,
        value: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            self.simulate_latency().await;
            self.state.insert((db, key.to_string()), value);
            Ok(())
        })
    }

    fn close(&self) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move { Ok(()) })
    }
}
