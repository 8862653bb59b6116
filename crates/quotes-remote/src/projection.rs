//! Mapping remote items onto quotes.

use quotes_core::types::Quote;
use serde::Deserialize;

/// An item as returned by the remote endpoint. Only the title is used;
/// every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteItem {
    #[serde(default)]
    pub title: String,
}

/// Project remote items onto quotes.
///
/// The title becomes the text and every quote is tagged with
/// `origin_category`. Items whose title is blank are skipped. At most
/// `limit` quotes are returned, taken from the front of the list.
pub fn project_items(items: Vec<RemoteItem>, origin_category: &str, limit: usize) -> Vec<Quote> {
    items
        .into_iter()
        .filter_map(|item| Quote::new(item.title, origin_category).ok())
        .take(limit)
        .collect()
}
