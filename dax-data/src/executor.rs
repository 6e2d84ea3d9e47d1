use crate::error::QueryError;
use crate::page::{Page, Pageable};
use crate::store::EntityStore;
use std::future::Future;

/// Paginated querying over any [`EntityStore`].
///
/// Blanket-implemented for every store, so bringing the trait into scope
/// adds `query_pages` everywhere:
///
/// ```ignore
/// use dax_data::prelude::*;
///
/// let page = store
///     .query_pages(|u: &User| u.active, |u| u.name.clone(), &Pageable::new(1, 20))
///     .await?;
/// ```
pub trait PagedQuery<T>: EntityStore<T>
where
    T: Send + Sync + 'static,
{
    /// One page of the entities satisfying `predicate`, sorted by
    /// `order_key`, together with the total filtered count.
    ///
    /// The total is computed over the whole filtered set, independent of
    /// the pagination window, and is identical for every page of the same
    /// query. A page index past the end yields an empty page, not an
    /// error. Ties in `order_key` keep the store's natural order (stable
    /// sort), in both directions.
    fn query_pages<P, F, K>(
        &self,
        predicate: P,
        order_key: F,
        pageable: &Pageable,
    ) -> impl Future<Output = Result<Page<T>, QueryError>> + Send
    where
        P: Fn(&T) -> bool + Send + Sync,
        F: Fn(&T) -> K + Send + Sync,
        K: Ord;
}

impl<T, S> PagedQuery<T> for S
where
    T: Send + Sync + 'static,
    S: EntityStore<T>,
{
    fn query_pages<P, F, K>(
        &self,
        predicate: P,
        order_key: F,
        pageable: &Pageable,
    ) -> impl Future<Output = Result<Page<T>, QueryError>> + Send
    where
        P: Fn(&T) -> bool + Send + Sync,
        F: Fn(&T) -> K + Send + Sync,
        K: Ord,
    {
        async move {
            if pageable.size <= 0 {
                return Err(QueryError::InvalidPageSize(pageable.size));
            }
            let offset = pageable.offset() as usize;
            let size = pageable.size as usize;

            // Full count over the filtered set, never the post-slice count.
            let total = self.count(&predicate).await?;
            let mut matched = self.filter(&predicate).await?;

            matched.sort_by(|a, b| {
                let ordering = order_key(a).cmp(&order_key(b));
                if pageable.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });

            let content: Vec<T> = matched.into_iter().skip(offset).take(size).collect();
            Ok(Page::new(content, pageable, total))
        }
    }
}
