//! Pluggable transport for the store connection.
//!
//! [`StoreConnector`] owns endpoint resolution and authentication;
//! [`StoreTransport`] is one established connection. Implement both to
//! plug in a concrete wire protocol. The crate ships an in-memory pair
//! ([`InMemoryConnector`]) for tests and local development.
//!
//! [`InMemoryConnector`]: crate::InMemoryConnector

use crate::config::StoreConfig;
use crate::error::StoreError;
use bytes::Bytes;
use std::future::Future;
use std::pin::Pin;

/// One established connection to a remote key-value store.
///
/// The logical database index is an address-only parameter on every
/// operation: switching namespaces neither authenticates nor opens a new
/// connection.
pub trait StoreTransport: Send + Sync + 'static {
    /// Read a key from the given logical database.
    fn get<'a>(
        &'a self,
        db: u32,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Bytes>, StoreError>> + Send + 'a>>;

    /// Write a key in the given logical database.
    fn set<'a>(
        &'a self,
        db: u32,
        key: &'a str,
        value: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>>;

    /// Release the underlying connection.
    fn close(&self) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;
}

/// Factory establishing [`StoreTransport`] connections.
pub trait StoreConnector: Send + Sync {
    /// Resolve the endpoint, authenticate if `config.password` is
    /// non-empty, and establish a transport.
    ///
    /// Implementations do not enforce the connect deadline themselves;
    /// [`StoreClient::connect`] drives this future under
    /// `config.connect_timeout()`.
    ///
    /// [`StoreClient::connect`]: crate::StoreClient::connect
    fn connect<'a>(
        &'a self,
        config: &'a StoreConfig,
    ) -> Pin<Box<dyn Future<Output = Result<Box<dyn StoreTransport>, StoreError>> + Send + 'a>>;
}
