//! DAX — data access core.
//!
//! This facade crate re-exports the DAX sub-crates through a single
//! dependency with feature flags. Import everything you need with:
//!
//! ```ignore
//! use dax::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature | Default | Crate       |
//! |---------|---------|-------------|
//! | `store` | **yes** | `dax-store` |
//! | `data`  | **yes** | `dax-data`  |
//! | `full`  | no      | All of the above |

#[cfg(feature = "store")]
pub use dax_store;

#[cfg(feature = "data")]
pub use dax_data;

pub mod prelude {
    //! Re-exports of the most commonly used types from every enabled
    //! sub-crate.
    #[cfg(feature = "data")]
    pub use dax_data::prelude::*;
    #[cfg(feature = "store")]
    pub use dax_store::prelude::*;
}
