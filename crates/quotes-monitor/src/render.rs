//! Plain-text rendering for the terminal.

use quotes_core::types::Quote;
use quotes_sync::SyncOutcome;

/// Shown when there is nothing to display.
pub const EMPTY_COLLECTION: &str = "No quotes available. Add some!";

/// Render one quote.
pub fn render_quote(quote: &Quote) -> String {
    format!("\"{}\"\n  Category: {}", quote.text, quote.category)
}

/// Render the result of a sync pass.
pub fn render_outcome(outcome: &SyncOutcome) -> String {
    if let Some(kind) = outcome.error_kind {
        return format!("Sync failed ({}); local quotes unchanged", kind);
    }
    outcome
        .notification()
        .unwrap_or_else(|| "Quotes are up to date".to_string())
}

/// Render a category list, one per line.
pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return EMPTY_COLLECTION.to_string();
    }
    categories
        .iter()
        .map(|c| format!("  {}", c))
        .collect::<Vec<_>>()
        .join("\n")
}
