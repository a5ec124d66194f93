//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of the most commonly used
//! types so that consumers can do `use strata_common::prelude::*;` without
//! listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use strata_common::prelude::*;
//! ```

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::error::{
    BaseError, DEFAULT_FAILURE_STATUS, Error, FormatOrString, Interrupted, SysError,
};

// ─── Non-null references ────────────────────────────────────────────
pub use crate::refs::{NullRef, Ref, make_ref};

// ─── Shared vocabulary ──────────────────────────────────────────────
pub use crate::types::{Path, PathSet, Paths, StringSet, Strings};

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::verbosity::Verbosity;
