//! Audit snapshot - one immutable, identified set of raw rows.

use std::sync::Arc;

use super::RawRecord;
use crate::domain::foundation::{SnapshotId, Timestamp};

/// An immutable set of raw rows.
///
/// Cloning is cheap: the rows are shared. A new load always produces a new
/// snapshot with a new id; snapshots are never edited in place.
#[derive(Debug, Clone)]
pub struct AuditSnapshot {
    id: SnapshotId,
    records: Arc<[RawRecord]>,
    loaded_at: Timestamp,
}

impl AuditSnapshot {
    /// Creates a snapshot with a fresh id.
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            id: SnapshotId::new(),
            records: records.into(),
            loaded_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn loaded_at(&self) -> Timestamp {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_snapshot_gets_its_own_id() {
        let a = AuditSnapshot::new(vec![]);
        let b = AuditSnapshot::new(vec![]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clones_share_rows_and_identity() {
        let snapshot = AuditSnapshot::new(vec![RawRecord::new("A", "X", 1, "T1", None)]);
        let clone = snapshot.clone();

        assert_eq!(clone.id(), snapshot.id());
        assert!(std::ptr::eq(clone.records(), snapshot.records()));
        assert_eq!(clone.len(), 1);
        assert!(!clone.is_empty());
    }
}
