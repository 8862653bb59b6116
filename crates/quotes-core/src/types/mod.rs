//! Core data types for the quote collection.

mod quote;

pub use quote::{Collection, Quote};
