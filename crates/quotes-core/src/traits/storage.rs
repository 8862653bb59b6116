//! Durable storage slot trait.

use crate::error::StorageError;

/// A single named slot holding a serialized value.
///
/// The slot knows nothing about the content; parsing is left to the caller.
pub trait StorageSlot: Send + Sync {
    /// Read the slot.
    ///
    /// # Returns
    /// `None` if the slot has never been written or has been cleared
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot with `contents`.
    fn write(&self, contents: &str) -> Result<(), StorageError>;

    /// Remove whatever the slot holds.
    fn clear(&self) -> Result<(), StorageError>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;
}
