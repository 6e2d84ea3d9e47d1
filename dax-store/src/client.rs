//! Store handle and logical database views.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::transport::{StoreConnector, StoreTransport};
use bytes::Bytes;
use std::time::Duration;

/// An open connection to a remote key-value store.
///
/// Owns the underlying transport exclusively. Obtain one with
/// [`connect`](Self::connect), derive per-namespace views with
/// [`database`](Self::database), and release the transport exactly once
/// with [`close`](Self::close). `close` consumes the client, so a second
/// close does not compile.
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::new("192.168.0.101", 6379, "secret");
/// let client = StoreClient::connect(&config, &connector).await?;
///
/// let db = client.database(1);
/// db.set("dev:test", "hello").await?;
///
/// client.close().await?;
/// ```
pub struct StoreClient {
    transport: Box<dyn StoreTransport>,
    operation_timeout: Duration,
}

impl StoreClient {
    /// Establish a connection using the given connector.
    ///
    /// Validates the config, then drives the connector under the connect
    /// timeout. No retries: a failed or timed-out connect is surfaced to
    /// the caller as-is.
    pub async fn connect<C>(config: &StoreConfig, connector: &C) -> Result<Self, StoreError>
    where
        C: StoreConnector + ?Sized,
    {
        config.validate()?;
        let transport = tokio::time::timeout(config.connect_timeout(), connector.connect(config))
            .await
            .map_err(|_| StoreError::Timeout("connect"))??;
        tracing::debug!(host = %config.host, port = config.port, "store connection established");
        Ok(Self {
            transport,
            operation_timeout: config.operation_timeout(),
        })
    }

    /// A view of the logical database at `index`.
    ///
    /// Constant-time, never fails, opens no new connection. Views share
    /// this client's transport and cannot outlive it.
    pub fn database(&self, index: u32) -> Database<'_> {
        Database { client: self, index }
    }

    /// Release the underlying transport.
    pub async fn close(self) -> Result<(), StoreError> {
        let res = self.transport.close().await;
        tracing::debug!("store connection closed");
        res
    }
}

/// A lightweight view of one logical database within a [`StoreClient`].
///
/// `Copy`, and freely shared for reads. Writes must be serialized by the
/// caller unless the underlying transport documents per-call atomicity.
#[derive(Clone, Copy)]
pub struct Database<'a> {
    client: &'a StoreClient,
    index: u32,
}

impl Database<'_> {
    /// The logical database index this view addresses.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Read a key. Resolves to `None` if the key is absent.
    pub async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        tokio::time::timeout(
            self.client.operation_timeout,
            self.client.transport.get(self.index, key),
        )
        .await
        .map_err(|_| StoreError::Timeout("get"))?
    }

    /// Write a key.
    pub async fn set(&self, key: &str, value: impl Into<Bytes>) -> Result<(), StoreError> {
        tokio::time::timeout(
            self.client.operation_timeout,
            self.client.transport.set(self.index, key, value.into()),
        )
        .await
        .map_err(|_| StoreError::Timeout("set"))?
    }
}
