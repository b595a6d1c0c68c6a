//! # folio-core - Core Domain Types
//!
//! Foundation crate for Folio. Provides the content tree model, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, indexmap, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Content Tree (`content`)
//! - [`Global`] - Root of the tree: site description and categories
//! - [`Category`], [`Subcategory`], [`Article`] - Nested records
//! - [`ContentBlock`] - Heading / paragraph / image block of an article
//! - [`ContentDocument`] - The `{ "global": ... }` document wrapper
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use content::{Article, Category, ContentBlock, ContentDocument, Global, Subcategory};
pub use error::{Error, Result, ResultExt};
