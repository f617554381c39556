//! CacheDNS Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the in-memory cache
//! store, JSON snapshot persistence, the UDP upstream gateway and the
//! datagram handler.
pub mod cache;
pub mod dns;
pub mod persistence;
pub mod upstream;

pub use cache::InMemoryCacheStore;
pub use dns::DnsRequestHandler;
pub use persistence::JsonSnapshotStore;
pub use upstream::UdpUpstreamGateway;
