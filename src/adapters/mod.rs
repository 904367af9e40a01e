//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `snapshot` - Audit snapshot stores (in-memory)

pub mod snapshot;

pub use snapshot::InMemoryAuditSnapshotStore;
