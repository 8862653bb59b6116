//! Remote source trait definition.

use crate::error::TransportError;
use crate::types::Quote;
use async_trait::async_trait;

/// Trait for the remote quote collection.
///
/// Implementations are stateless wrappers around two remote operations.
/// Callers are expected to bound both calls with a timeout.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch remote records projected into quotes.
    ///
    /// # Returns
    /// At most a fixed number of quotes. Repeated calls may return the same
    /// prefix; this is not a page cursor.
    async fn list_remote(&self) -> Result<Vec<Quote>, TransportError>;

    /// Submit a single quote.
    ///
    /// Best effort. The local store is already updated before this is called
    /// and a failure here never rolls it back.
    ///
    /// # Arguments
    /// * `quote` - The quote to submit
    async fn submit_one(&self, quote: &Quote) -> Result<(), TransportError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
