//! # coursebook-core - Core Domain Types
//!
//! Foundation crate for Coursebook. Provides the course data model, the
//! built-in sample catalog, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Courses (`course`)
//! - [`Course`] - One immutable course record
//! - [`Catalog`] - Ordered list of courses, loadable from TOML
//!
//! ### Sample data (`sample`)
//! - [`sample_catalog()`] - The fifteen bundled courses
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for logging error context
//!
//! ## Prelude
//!
//! ```rust
//! use coursebook_core::prelude::*;
//! ```

pub mod course;
pub mod error;
pub mod logging;
pub mod sample;

/// Prelude for common imports used throughout all Coursebook crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use course::{Catalog, Course};
pub use error::{Error, Result, ResultExt};
pub use sample::sample_catalog;
