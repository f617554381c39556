mod mock_ports;

pub use mock_ports::{MockCacheStore, MockSnapshotStore, MockUpstreamGateway};
