/// Errors that can occur in the query layer.
#[derive(Debug)]
pub enum QueryError {
    /// The requested page size was zero or negative.
    InvalidPageSize(i64),
    /// The backing store did not answer within its deadline.
    Timeout(String),
    /// The backing store failed while filtering or counting.
    Store(Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    /// Construct a `Store` variant from any error type.
    ///
    /// Used by entity-store implementations to wrap backend-specific
    /// errors.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        QueryError::Store(Box::new(err))
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidPageSize(size) => write!(f, "Invalid page size: {size}"),
            QueryError::Timeout(op) => write!(f, "Query timed out: {op}"),
            QueryError::Store(err) => write!(f, "Store error: {err}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Store(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            QueryError::InvalidPageSize(-1).to_string(),
            "Invalid page size: -1"
        );
        assert_eq!(
            QueryError::Timeout("count".into()).to_string(),
            "Query timed out: count"
        );
    }

    #[test]
    fn test_store_source_is_preserved() {
        let err = QueryError::store(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ));
        assert_eq!(err.to_string(), "Store error: reset");
        assert!(err.source().is_some());
    }
}
