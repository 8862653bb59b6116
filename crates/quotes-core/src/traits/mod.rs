//! Boundary traits for the quote collection.

mod remote_source;
mod storage;

pub use remote_source::RemoteSource;
pub use storage::StorageSlot;
