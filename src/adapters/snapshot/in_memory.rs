//! In-Memory Audit Snapshot Store Adapter
//!
//! Holds the current snapshot behind a `tokio::sync::RwLock`. Replacement
//! swaps a single `Arc`, so readers never observe a partial snapshot.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::audit::AuditSnapshot;
use crate::domain::foundation::SnapshotId;
use crate::ports::{AuditSnapshotStore, SnapshotStoreError};

/// In-memory storage for the current audit snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSnapshotStore {
    current: Arc<RwLock<Option<Arc<AuditSnapshot>>>>,
}

impl InMemoryAuditSnapshotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `snapshot`
    pub fn with_snapshot(snapshot: AuditSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(Arc::new(snapshot)))),
        }
    }

    /// Drop the current snapshot (useful for tests)
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}

#[async_trait]
impl AuditSnapshotStore for InMemoryAuditSnapshotStore {
    async fn current(&self) -> Result<Option<Arc<AuditSnapshot>>, SnapshotStoreError> {
        Ok(self.current.read().await.clone())
    }

    async fn replace(
        &self,
        snapshot: AuditSnapshot,
    ) -> Result<Option<SnapshotId>, SnapshotStoreError> {
        let id = snapshot.id();
        let mut current = self.current.write().await;
        let previous = current.replace(Arc::new(snapshot)).map(|s| s.id());

        debug!(snapshot_id = %id, previous = ?previous, "Audit snapshot replaced");
        Ok(previous)
    }
}
