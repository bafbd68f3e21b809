// Session snapshots on disk.

pub mod snapshot;

pub use snapshot::{Snapshot, SnapshotError, SnapshotStore};
