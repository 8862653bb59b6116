//! Remembers the most recently displayed quote.

use quotes_core::error::StorageError;
use quotes_core::traits::StorageSlot;
use quotes_core::types::Quote;
use tracing::debug;

/// Slot holding the last quote shown to the user.
pub struct LastViewed {
    slot: Box<dyn StorageSlot>,
}

impl LastViewed {
    pub fn new(slot: Box<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// The remembered quote. Unreadable content counts as nothing remembered.
    pub fn get(&self) -> Option<Quote> {
        let raw = self.slot.read().ok().flatten()?;
        match serde_json::from_str::<Quote>(&raw) {
            Ok(quote) => Some(quote),
            Err(e) => {
                debug!("Ignoring unreadable last viewed quote: {}", e);
                None
            }
        }
    }

    pub fn set(&self, quote: &Quote) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(quote).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.slot.write(&json)
    }
}
