//! Core types and traits for the quote collection.
//!
//! This crate provides the foundational building blocks including:
//! - The `Quote` record and the `Collection` it lives in
//! - Error types shared across the workspace
//! - Boundary traits for remote sources and durable storage slots

pub mod types;
pub mod traits;
pub mod error;

pub use error::{QuoteError, QuoteResult};
pub use types::*;
pub use traits::*;
