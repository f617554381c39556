mod cache_store;
mod snapshot_store;
mod upstream_gateway;

pub use cache_store::CacheStore;
pub use snapshot_store::SnapshotStore;
pub use upstream_gateway::UpstreamGateway;
