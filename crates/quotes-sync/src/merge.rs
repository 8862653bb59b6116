//! Merge policy for remote quotes.

use quotes_core::types::Quote;
use std::collections::HashSet;

/// Result of reconciling remote candidates against the local collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeResult {
    /// Candidates to append, in input order
    pub admitted: Vec<Quote>,
    /// True iff anything was admitted
    pub changed: bool,
}

/// Decide which remote candidates are new.
///
/// A candidate is admitted when no local quote and no earlier admitted
/// candidate shares its text. Comparison is exact and case-sensitive and
/// ignores the category, so the first category seen for a text wins.
/// Remote quotes never replace or remove local ones.
pub fn reconcile(local: &[Quote], candidates: &[Quote]) -> MergeResult {
    let mut present: HashSet<&str> = local.iter().map(Quote::identity).collect();

    let mut admitted = Vec::new();
    for candidate in candidates {
        if present.insert(candidate.identity()) {
            admitted.push(candidate.clone());
        }
    }

    MergeResult {
        changed: !admitted.is_empty(),
        admitted,
    }
}
