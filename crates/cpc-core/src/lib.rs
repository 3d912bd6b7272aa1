//! # cpc-core
//!
//! Core error definitions and text helpers for delais-cpc.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the error hierarchy with its `ensure!` and
//! `ensure_post!` macros, and the parsers and formatters used to
//! read and display civil dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
