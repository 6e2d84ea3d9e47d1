use dax_data::prelude::*;
use dax_data::InMemoryEntityStore;
use std::future::{ready, Future};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: i64,
    name: String,
}

fn item(id: i64, name: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
    }
}

fn names(page: &Page<Item>) -> Vec<&str> {
    page.content.iter().map(|i| i.name.as_str()).collect()
}

fn sample() -> InMemoryEntityStore<Item> {
    InMemoryEntityStore::from_vec(vec![item(1, "b"), item(2, "a"), item(3, "c")])
}

#[tokio::test]
async fn test_end_to_end_example() {
    let store = sample();

    let page = store
        .query_pages(|_| true, |i| i.name.clone(), &Pageable::new(1, 2))
        .await
        .unwrap();
    assert_eq!(page.content, vec![item(2, "a"), item(1, "b")]);
    assert_eq!(page.total_elements, 3);

    let page = store
        .query_pages(|_| true, |i| i.name.clone(), &Pageable::new(2, 2))
        .await
        .unwrap();
    assert_eq!(page.content, vec![item(3, "c")]);
    assert_eq!(page.total_elements, 3);
}

#[tokio::test]
async fn test_page_concatenation_covers_all() {
    let items: Vec<Item> = (0..10).map(|n| item(n, &format!("n{n:02}"))).collect();
    let store = InMemoryEntityStore::from_vec(items.clone());

    let mut seen = Vec::new();
    for page_num in 1..=4 {
        let page = store
            .query_pages(|_| true, |i| i.id, &Pageable::new(page_num, 3))
            .await
            .unwrap();
        assert_eq!(page.total_pages, 4);
        seen.extend(page.content);
    }
    assert_eq!(seen, items);
}

#[tokio::test]
async fn test_total_is_invariant_across_pages() {
    let store = sample();
    for page_num in [1, 2, 7] {
        let page = store
            .query_pages(|i| i.id >= 2, |i| i.id, &Pageable::new(page_num, 1))
            .await
            .unwrap();
        assert_eq!(page.total_elements, 2);
    }
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let store = sample();
    let page = store
        .query_pages(|_| true, |i| i.id, &Pageable::new(9, 2))
        .await
        .unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 3);
}

#[tokio::test]
async fn test_non_positive_page_behaves_like_first() {
    let store = sample();
    let first = store
        .query_pages(|_| true, |i| i.id, &Pageable::new(1, 2))
        .await
        .unwrap();
    for page_num in [0, -5] {
        let page = store
            .query_pages(|_| true, |i| i.id, &Pageable::new(page_num, 2))
            .await
            .unwrap();
        assert_eq!(page.content, first.content);
        assert_eq!(page.page, 1);
    }
}

#[tokio::test]
async fn test_invalid_page_size_rejected() {
    let store = sample();
    for size in [0, -1] {
        let res = store
            .query_pages(|_| true, |i| i.id, &Pageable::new(1, size))
            .await;
        assert!(matches!(res, Err(QueryError::InvalidPageSize(s)) if s == size));
    }
}

#[tokio::test]
async fn test_duplicate_keys_keep_insertion_order() {
    let store = InMemoryEntityStore::from_vec(vec![
        item(1, "dup"),
        item(2, "dup"),
        item(3, "aaa"),
        item(4, "dup"),
    ]);
    let expected = vec![item(3, "aaa"), item(1, "dup"), item(2, "dup"), item(4, "dup")];

    for _ in 0..3 {
        let page = store
            .query_pages(|_| true, |i| i.name.clone(), &Pageable::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page.content, expected);
    }
}

#[tokio::test]
async fn test_descending_order() {
    let store = sample();
    let page = store
        .query_pages(|_| true, |i| i.name.clone(), &Pageable::new(1, 10).descending())
        .await
        .unwrap();
    assert_eq!(names(&page), vec!["c", "b", "a"]);
}

#[tokio::test]
async fn test_descending_keeps_ties_stable() {
    let store = InMemoryEntityStore::from_vec(vec![item(1, "dup"), item(2, "dup"), item(3, "zzz")]);
    let page = store
        .query_pages(|_| true, |i| i.name.clone(), &Pageable::new(1, 10).descending())
        .await
        .unwrap();
    assert_eq!(page.content, vec![item(3, "zzz"), item(1, "dup"), item(2, "dup")]);
}

#[tokio::test]
async fn test_predicate_filters() {
    let store = sample();
    let page = store
        .query_pages(|i| i.name != "b", |i| i.name.clone(), &Pageable::new(1, 10))
        .await
        .unwrap();
    assert_eq!(names(&page), vec!["a", "c"]);
    assert_eq!(page.total_elements, 2);
}

#[tokio::test]
async fn test_empty_store() {
    let store: InMemoryEntityStore<Item> = InMemoryEntityStore::new();
    let page = store
        .query_pages(|_| true, |i| i.id, &Pageable::new(1, 5))
        .await
        .unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_push_appends_in_natural_order() {
    let store = InMemoryEntityStore::new();
    assert!(store.is_empty());

    store.push(item(1, "b"));
    store.push(item(2, "a"));
    assert_eq!(store.len(), 2);

    let page = store
        .query_pages(|_| true, |i| i.id, &Pageable::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.content, vec![item(1, "b"), item(2, "a")]);
}

/// Store whose filter and count always fail.
struct FailingStore;

impl EntityStore<Item> for FailingStore {
    fn filter<P>(&self, _predicate: P) -> impl Future<Output = Result<Vec<Item>, QueryError>> + Send
    where
        P: Fn(&Item) -> bool + Send + Sync,
    {
        ready(Err(QueryError::store(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ))))
    }

    fn count<P>(&self, _predicate: P) -> impl Future<Output = Result<u64, QueryError>> + Send
    where
        P: Fn(&Item) -> bool + Send + Sync,
    {
        ready(Err(QueryError::store(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ))))
    }
}

#[tokio::test]
async fn test_store_failure_fails_whole_query() {
    let res = FailingStore
        .query_pages(|_| true, |i| i.id, &Pageable::new(1, 2))
        .await;
    assert!(matches!(res, Err(QueryError::Store(_))));
}
