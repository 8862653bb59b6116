//! Quote record.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A short text tagged with a category.
///
/// Quotes carry no identity field. When deciding whether two quotes are the
/// same record only the text is compared, exactly and case-sensitively; the
/// category is ignored. See [`Quote::identity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text
    pub text: String,
    /// Category tag
    pub category: String,
}

/// Ordered sequence of quotes. New records are only ever appended.
pub type Collection = Vec<Quote>;

impl Quote {
    /// Create a quote from user input.
    ///
    /// Both fields are trimmed; either one empty after trimming is rejected.
    pub fn new(
        text: impl AsRef<str>,
        category: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let quote = Self {
            text: text.as_ref().trim().to_string(),
            category: category.as_ref().trim().to_string(),
        };
        quote.validate()?;
        Ok(quote)
    }

    /// Check that neither field is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// The key used for duplicate detection.
    pub fn identity(&self) -> &str {
        &self.text
    }

    /// Whether both quotes refer to the same record.
    pub fn same_record(&self, other: &Quote) -> bool {
        self.identity() == other.identity()
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" ({})", self.text, self.category)
    }
}
