//! LoadAuditSnapshotHandler - Command handler for replacing the audit data.

use std::sync::Arc;
use tracing::info;

use crate::domain::audit::{AuditSnapshot, BoundaryRow, RawRecord};
use crate::domain::foundation::SnapshotId;
use crate::ports::{AuditSnapshotStore, SnapshotStoreError};

/// Command to load a new set of audit rows.
#[derive(Debug, Clone, Default)]
pub struct LoadAuditSnapshotCommand {
    pub records: Vec<RawRecord>,
}

impl LoadAuditSnapshotCommand {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Builds the command from untyped rows, dropping rows that cannot be
    /// identified.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = BoundaryRow>,
    {
        Self::new(RawRecord::from_boundary_rows(rows))
    }
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAuditSnapshotResult {
    pub snapshot_id: SnapshotId,
    pub record_count: usize,
    /// Snapshot that was current before this load.
    pub replaced: Option<SnapshotId>,
}

/// Handler for loading audit snapshots.
pub struct LoadAuditSnapshotHandler {
    store: Arc<dyn AuditSnapshotStore>,
}

impl LoadAuditSnapshotHandler {
    pub fn new(store: Arc<dyn AuditSnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: LoadAuditSnapshotCommand,
    ) -> Result<LoadAuditSnapshotResult, SnapshotStoreError> {
        let snapshot = AuditSnapshot::new(cmd.records);
        let snapshot_id = snapshot.id();
        let record_count = snapshot.len();

        let replaced = self.store.replace(snapshot).await?;

        info!(
            snapshot_id = %snapshot_id,
            records = record_count,
            replaced = ?replaced,
            "Audit snapshot loaded"
        );

        Ok(LoadAuditSnapshotResult {
            snapshot_id,
            record_count,
            replaced,
        })
    }
}
