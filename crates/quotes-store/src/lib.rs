//! Durable local quote collection.

mod last_viewed;
mod seed;
mod slot;
mod store;
mod transfer;

pub use last_viewed::LastViewed;
pub use seed::seed_quotes;
pub use slot::{FileSlot, MemorySlot};
pub use store::{QuoteStore, SharedStore};
pub use transfer::{export_json, import_json, parse_import};
