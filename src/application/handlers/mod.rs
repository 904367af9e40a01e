//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod audit;

pub use audit::{
    AuditQueryError, GetAuditOverviewHandler, GetAuditOverviewQuery, GetAuditOverviewResult,
    LoadAuditSnapshotCommand, LoadAuditSnapshotHandler, LoadAuditSnapshotResult,
};
