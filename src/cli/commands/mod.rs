//! CLI command implementations.

pub mod add;
pub mod categories;
pub mod export;
pub mod import;
pub mod show;
pub mod sync;
pub mod validate;
pub mod watch;
