//! Audit command and query handlers.
//!
//! Loading replaces the current snapshot; the overview query derives the
//! dashboard view from whatever snapshot is current.

mod get_audit_overview;
mod load_audit_snapshot;

pub use get_audit_overview::{
    AuditQueryError, GetAuditOverviewHandler, GetAuditOverviewQuery, GetAuditOverviewResult,
};
pub use load_audit_snapshot::{
    LoadAuditSnapshotCommand, LoadAuditSnapshotHandler, LoadAuditSnapshotResult,
};
