//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AuditSnapshotStore` - Holds the current audit snapshot

mod audit_snapshot_store;

pub use audit_snapshot_store::{AuditSnapshotStore, SnapshotStoreError};
