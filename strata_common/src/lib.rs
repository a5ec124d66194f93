//! Strata Common Library
//!
//! This crate provides the shared foundational primitives for all Strata
//! workspace crates: the error hierarchy every fallible component reports
//! through, the non-null shared reference handle, and the string/path
//! vocabulary the rest of the system compiles against.
//!
//! # Module Structure
//!
//! - [`error`] - Error hierarchy: `BaseError`, `Error`, `SysError`, `make_error!`
//! - [`refs`] - Non-null reference-counted handle: `Ref<T>`, `make_ref`
//! - [`types`] - Shared string and path aliases
//! - [`verbosity`] - Ordered log-filtering levels
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! strata_common = { path = "../strata_common" }
//! ```
//!
//! Then import:
//! ```rust
//! use strata_common::prelude::*;
//!
//! fn fetch() -> strata_common::error::Result<()> {
//!     Err(Error::new("unexpected end of stream"))
//! }
//!
//! let mut err = fetch().unwrap_err();
//! err.add_prefix("while fetching 'foo.tar': ");
//! assert_eq!(err.message(), "while fetching 'foo.tar': unexpected end of stream");
//! ```

pub mod error;
pub mod prelude;
pub mod refs;
pub mod types;
pub mod verbosity;
