use serde::{Deserialize, Serialize};

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    20
}

/// Pagination parameters, extractable from query params.
///
/// `page` is 1-based; zero and negative values are treated as page 1.
/// `size` must be positive — the executor rejects anything else with
/// [`QueryError::InvalidPageSize`](crate::QueryError::InvalidPageSize).
#[derive(Debug, Clone, Deserialize)]
pub struct Pageable {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default)]
    pub descending: bool,
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: 1,
            size: 20,
            descending: false,
        }
    }
}

impl Pageable {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page,
            size,
            descending: false,
        }
    }

    /// Request descending order.
    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// The page number with non-positive values normalized to 1.
    pub fn normalized_page(&self) -> u64 {
        if self.page <= 0 {
            1
        } else {
            self.page as u64
        }
    }

    /// Offset of the first item of this page within the filtered, sorted
    /// sequence.
    pub fn offset(&self) -> u64 {
        (self.normalized_page() - 1).saturating_mul(self.size.max(0) as u64)
    }
}

/// A page of results with pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &Pageable, total_elements: u64) -> Self {
        let size = pageable.size.max(0) as u64;
        let total_pages = if size == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        Self {
            content,
            page: pageable.normalized_page(),
            size,
            total_elements,
            total_pages,
        }
    }
}
