//! Audit Snapshot Store Port - Interface for holding the current audit data.
//!
//! Exactly one snapshot is current at a time. Loading new data replaces it
//! as a whole; readers always see either the old or the new snapshot.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::audit::AuditSnapshot;
use crate::domain::foundation::SnapshotId;

/// Errors that can occur during snapshot store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("Snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Port for the current audit snapshot
#[async_trait]
pub trait AuditSnapshotStore: Send + Sync {
    /// Returns the current snapshot, if any data has been loaded.
    async fn current(&self) -> Result<Option<Arc<AuditSnapshot>>, SnapshotStoreError>;

    /// Makes `snapshot` current.
    ///
    /// # Returns
    /// The id of the snapshot it replaced, if there was one
    async fn replace(
        &self,
        snapshot: AuditSnapshot,
    ) -> Result<Option<SnapshotId>, SnapshotStoreError>;
}
