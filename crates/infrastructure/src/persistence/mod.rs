mod json_snapshots;

pub use json_snapshots::JsonSnapshotStore;
