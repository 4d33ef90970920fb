//! Common utility functions shared across the domain.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **No entity types** - helpers must not import from `aggregates` or `fleet`

pub mod args;
pub mod string;

// Re-export commonly used functions at module root for convenience
pub use string::{is_blank, StringExt};
