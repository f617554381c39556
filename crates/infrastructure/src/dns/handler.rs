use std::sync::Arc;

use cachedns_application::ResolveQueryUseCase;
use cachedns_domain::dns_message::wire;
use tracing::warn;

/// Raw-datagram boundary around the resolution engine.
///
/// Undecodable input is dropped without a reply, matching typical
/// resolver behavior toward malformed datagrams; everything decodable
/// gets an answer.
pub struct DnsRequestHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsRequestHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Loads the persisted cache snapshots. Called once at startup.
    pub fn hydrate(&self) {
        self.use_case.hydrate();
    }

    /// Flushes both cache snapshots. Called on every termination path.
    pub fn flush(&self) {
        self.use_case.flush();
    }

    pub async fn handle_datagram(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let query = match wire::decode(datagram) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, len = datagram.len(), "Dropping undecodable datagram");
                return None;
            }
        };

        let response = self.use_case.execute(&query, datagram).await;
        Some(wire::encode(&response))
    }
}
