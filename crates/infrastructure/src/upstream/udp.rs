//! UDP gateway to the single fixed upstream resolver.
//!
//! One socket, connected once at construction; messages are sent as-is
//! with no framing and the reply is awaited under a fixed receive
//! timeout. Callers are strictly sequential, so there is never more
//! than one request in flight and no multiplexing by query ID.

use async_trait::async_trait;
use cachedns_application::ports::UpstreamGateway;
use cachedns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size we accept from upstream.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpUpstreamGateway {
    socket: UdpSocket,
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpUpstreamGateway {
    /// Binds an ephemeral local port and connects it to the resolver.
    pub async fn connect(server_addr: SocketAddr, timeout: Duration) -> Result<Self, DomainError> {
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::UpstreamSocketError(format!("Failed to bind UDP socket: {}", e))
        })?;
        socket.connect(server_addr).await.map_err(|e| {
            DomainError::UpstreamSocketError(format!(
                "Failed to connect UDP socket to {}: {}",
                server_addr, e
            ))
        })?;

        Ok(Self {
            socket,
            server_addr,
            timeout,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

#[async_trait]
impl UpstreamGateway for UdpUpstreamGateway {
    async fn forward(&self, raw_query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = self.socket.send(raw_query).await.map_err(|e| {
            DomainError::UpstreamSocketError(format!(
                "Failed to send query to {}: {}",
                self.server_addr, e
            ))
        })?;
        debug!(server = %self.server_addr, bytes_sent, "Upstream query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(self.timeout, self.socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::UpstreamTimeout)?
            .map_err(|e| {
                DomainError::UpstreamSocketError(format!(
                    "Failed to receive response from {}: {}",
                    self.server_addr, e
                ))
            })?;
        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "Upstream response received");
        Ok(recv_buf)
    }
}
