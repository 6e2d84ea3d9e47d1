//! # dax-store — store connection manager
//!
//! Owns one long-lived connection to a remote key-value store and exposes
//! lightweight logical-database views over it.
//!
//! The wire protocol is pluggable: implement [`StoreConnector`] and
//! [`StoreTransport`] for a concrete store, or use the bundled
//! [`InMemoryConnector`] for tests and local development.
//!
//! ```ignore
//! let config = StoreConfig::new("192.168.0.101", 6379, "secret");
//! let client = StoreClient::connect(&config, &connector).await?;
//!
//! let db = client.database(1);
//! db.set("dev:test", "hello").await?;
//! assert_eq!(db.get("dev:test").await?, Some(Bytes::from("hello")));
//!
//! client.close().await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod transport;

pub use client::{Database, StoreClient};
pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::{InMemoryConnector, InMemoryTransport};
pub use transport::{StoreConnector, StoreTransport};

pub mod prelude {
    //! Re-exports of the most commonly used store types.
    pub use crate::{Database, StoreClient, StoreConfig, StoreConnector, StoreError, StoreTransport};
}
