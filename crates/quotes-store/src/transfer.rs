//! Bulk import and export.

use quotes_core::error::{ImportError, StorageError};
use quotes_core::types::{Collection, Quote};
use serde_json::Value;
use tracing::info;

use crate::store::QuoteStore;

/// Serialize quotes for export, pretty-printed.
pub fn export_json(quotes: &[Quote]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(quotes).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse an import payload.
///
/// The payload must be a JSON array of `{text, category}` objects and every
/// record must validate; otherwise nothing is returned.
pub fn parse_import(raw: &str) -> Result<Collection, ImportError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ImportError::Parse(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut quotes = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let quote: Quote = serde_json::from_value(item)
            .map_err(|e| ImportError::Parse(format!("record {}: {}", index, e)))?;
        quote
            .validate()
            .map_err(|source| ImportError::InvalidRecord { index, source })?;
        quotes.push(quote);
    }
    Ok(quotes)
}

/// Import a payload into the store.
///
/// Imported quotes are appended as they are, without duplicate detection.
///
/// # Returns
/// The number of quotes appended
pub fn import_json(store: &mut QuoteStore, raw: &str) -> Result<usize, ImportError> {
    let quotes = parse_import(raw)?;
    let count = store.append(quotes)?;
    info!("Imported {} quotes", count);
    Ok(count)
}
