pub mod error;
pub mod executor;
pub mod page;
pub mod schema;
pub mod store;

pub use error::QueryError;
pub use executor::PagedQuery;
pub use page::{Page, Pageable};
pub use schema::{Constraint, FieldError, Schema, ValidationErrors};
pub use store::{EntityStore, InMemoryEntityStore};

pub mod prelude {
    //! Re-exports of the most commonly used query types.
    pub use crate::{EntityStore, Page, Pageable, PagedQuery, QueryError};
}
