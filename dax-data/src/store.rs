use crate::error::QueryError;
use std::future::{ready, Future};
use std::sync::{Arc, RwLock};

/// A queryable collection of entities of type `T`.
///
/// The capability the pagination executor needs: filtering and counting
/// over an in-memory or externally backed collection.
///
/// Uses RPITIT (return-position `impl Trait` in traits) — no `async-trait`
/// needed.
pub trait EntityStore<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// All entities satisfying `predicate`, in the store's natural order.
    fn filter<P>(&self, predicate: P) -> impl Future<Output = Result<Vec<T>, QueryError>> + Send
    where
        P: Fn(&T) -> bool + Send + Sync;

    /// Number of entities satisfying `predicate`.
    fn count<P>(&self, predicate: P) -> impl Future<Output = Result<u64, QueryError>> + Send
    where
        P: Fn(&T) -> bool + Send + Sync;
}

/// Entity store over a shared in-memory `Vec`.
///
/// The natural order is insertion order.
pub struct InMemoryEntityStore<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryEntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Append an entity.
    pub fn push(&self, item: T) {
        self.items
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(item);
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryEntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> EntityStore<T> for InMemoryEntityStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn filter<P>(&self, predicate: P) -> impl Future<Output = Result<Vec<T>, QueryError>> + Send
    where
        P: Fn(&T) -> bool + Send + Sync,
    {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        let matched: Vec<T> = items.iter().filter(|&item| predicate(item)).cloned().collect();
        ready(Ok(matched))
    }

    fn count<P>(&self, predicate: P) -> impl Future<Output = Result<u64, QueryError>> + Send
    where
        P: Fn(&T) -> bool + Send + Sync,
    {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        let n = items.iter().filter(|&item| predicate(item)).count() as u64;
        ready(Ok(n))
    }
}
