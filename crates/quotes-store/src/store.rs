//! The quote store.

use quotes_core::error::StorageError;
use quotes_core::traits::StorageSlot;
use quotes_core::types::{Collection, Quote};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::seed::seed_quotes;

/// Store shared between the sync engine, the scheduler and the CLI.
///
/// The mutex serializes every read-modify-persist sequence.
pub type SharedStore = Arc<Mutex<QuoteStore>>;

/// Sole owner of the in-memory collection.
///
/// Every mutation is written through to the storage slot before it returns.
/// If the write fails the in-memory change is undone, so memory never holds
/// records that durable storage does not.
pub struct QuoteStore {
    quotes: Collection,
    slot: Box<dyn StorageSlot>,
}

impl QuoteStore {
    /// Open a store over `slot`, loading whatever it holds.
    pub fn open(slot: Box<dyn StorageSlot>) -> Self {
        let quotes = Self::load(slot.as_ref());
        Self { quotes, slot }
    }

    /// Wrap the store for sharing.
    pub fn shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Read the collection held by `slot`.
    ///
    /// Never fails. An absent slot yields the seed set; so does a slot that
    /// cannot be read or parsed, after logging why.
    pub fn load(slot: &dyn StorageSlot) -> Collection {
        let raw = match slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No stored quotes at {}, using seed set", slot.describe());
                return seed_quotes();
            }
            Err(e) => {
                warn!("Could not read {}: {}; using seed set", slot.describe(), e);
                return seed_quotes();
            }
        };

        match parse_collection(&raw) {
            Ok(quotes) => {
                debug!("Loaded {} quotes from {}", quotes.len(), slot.describe());
                quotes
            }
            Err(e) => {
                warn!("{} at {}; using seed set", e, slot.describe());
                seed_quotes()
            }
        }
    }

    /// Replace the whole collection and persist it.
    pub fn save(&mut self, collection: Collection) -> Result<(), StorageError> {
        Self::persist(self.slot.as_ref(), &collection)?;
        self.quotes = collection;
        Ok(())
    }

    /// Append `records` after the existing quotes and persist.
    ///
    /// No deduplication happens here; callers filter first if they need to.
    ///
    /// # Returns
    /// The number of records appended
    pub fn append(&mut self, records: Vec<Quote>) -> Result<usize, StorageError> {
        if records.is_empty() {
            return Ok(0);
        }

        let previous_len = self.quotes.len();
        let count = records.len();
        self.quotes.extend(records);

        if let Err(e) = Self::persist(self.slot.as_ref(), &self.quotes) {
            self.quotes.truncate(previous_len);
            return Err(e);
        }

        debug!("Appended {} quotes, collection now {}", count, self.quotes.len());
        Ok(count)
    }

    /// Clear durable storage. Memory falls back to the seed set, which is
    /// what the next `open` would produce.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.slot.clear()?;
        self.quotes = seed_quotes();
        info!("Cleared stored quotes at {}", self.slot.describe());
        Ok(())
    }

    /// Current quotes.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Owned copy of the current collection.
    pub fn snapshot(&self) -> Collection {
        self.quotes.clone()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !seen.iter().any(|c| c == &quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    /// Quotes tagged with `category`.
    pub fn by_category(&self, category: &str) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.category == category).collect()
    }

    fn persist(slot: &dyn StorageSlot, quotes: &[Quote]) -> Result<(), StorageError> {
        let json = serde_json::to_string(quotes)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        slot.write(&json)
    }
}

/// Only a parse or shape failure makes the slot corrupt. Individual records
/// that fail validation are dropped so the rest of the collection survives.
fn parse_collection(raw: &str) -> Result<Collection, StorageError> {
    let stored: Collection =
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;

    let mut quotes = Vec::with_capacity(stored.len());
    for (index, quote) in stored.into_iter().enumerate() {
        match quote.validate() {
            Ok(()) => quotes.push(quote),
            Err(e) => warn!("Dropping stored record {}: {}", index, e),
        }
    }
    Ok(quotes)
}
