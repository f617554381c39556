use async_trait::async_trait;
use cachedns_domain::DomainError;

/// Port for the single fixed upstream resolver.
///
/// One outstanding request at a time; the engine is strictly
/// synchronous, so no multiplexing by query ID is needed.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// Sends the raw query bytes and waits, bounded by the gateway's
    /// fixed receive timeout, for the raw response.
    async fn forward(&self, raw_query: &[u8]) -> Result<Vec<u8>, DomainError>;
}
