use std::net::SocketAddr;
use std::sync::Arc;

use cachedns_domain::DomainError;
use cachedns_infrastructure::DnsRequestHandler;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Largest inbound datagram we accept.
const MAX_DATAGRAM_SIZE: usize = 4096;

/// Runs the strictly sequential request loop: one datagram is received,
/// fully resolved (including any upstream round-trip) and answered
/// before the next one is read. Returns only on a fatal listen-socket
/// error; the caller owns the shutdown flush.
pub async fn start_dns_server(
    listen_address: &str,
    handler: Arc<DnsRequestHandler>,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = listen_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address '{}': {}", listen_address, e))?;

    let socket = UdpSocket::bind(socket_addr)
        .await
        .map_err(|e| DomainError::ListenSocketError(e.to_string()))?;
    info!(listen_address = %socket_addr, "DNS server ready");

    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        let (len, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                return Err(DomainError::ListenSocketError(e.to_string()).into());
            }
        };
        debug!(peer = %peer, bytes = len, "Datagram received");

        if let Some(response) = handler.handle_datagram(&recv_buf[..len]).await {
            if let Err(e) = socket.send_to(&response, peer).await {
                warn!(peer = %peer, error = %e, "Failed to send answer");
            }
        }
    }
}
