//! GetAuditOverviewHandler - Query handler for the audit dashboard.
//!
//! Returns the matrix rows for the requested theme filter and sort mode,
//! together with insight lists, company averages and column layout.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::AuditSettings;
use crate::domain::audit::{AuditAnalysis, AuditSnapshot, SortMode, ThemeFilter};
use crate::domain::dashboard::{AuditOverview, OverviewRequest};
use crate::domain::foundation::SnapshotId;
use crate::ports::{AuditSnapshotStore, SnapshotStoreError};

/// Query for the audit overview.
#[derive(Debug, Clone, Default)]
pub struct GetAuditOverviewQuery {
    pub theme_filter: ThemeFilter,
    pub sort_mode: SortMode,
}

/// Result of a successful overview query.
pub type GetAuditOverviewResult = AuditOverview;

/// Errors from audit queries.
#[derive(Debug, thiserror::Error)]
pub enum AuditQueryError {
    #[error("No audit snapshot has been loaded")]
    NoSnapshot,

    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
}

/// Handler for the audit overview.
///
/// The analysis of the current snapshot is computed once and reused until
/// the store holds a snapshot with a different id; only the projection is
/// redone per query.
pub struct GetAuditOverviewHandler {
    store: Arc<dyn AuditSnapshotStore>,
    settings: AuditSettings,
    cache: Mutex<Option<(SnapshotId, Arc<AuditAnalysis>)>>,
}

impl GetAuditOverviewHandler {
    pub fn new(store: Arc<dyn AuditSnapshotStore>, settings: AuditSettings) -> Self {
        Self {
            store,
            settings,
            cache: Mutex::new(None),
        }
    }

    pub async fn handle(
        &self,
        query: GetAuditOverviewQuery,
    ) -> Result<GetAuditOverviewResult, AuditQueryError> {
        let snapshot = self
            .store
            .current()
            .await?
            .ok_or(AuditQueryError::NoSnapshot)?;

        let analysis = self.analysis_for(&snapshot).await;

        Ok(AuditOverview::build(
            &analysis,
            OverviewRequest {
                snapshot_id: snapshot.id(),
                loaded_at: snapshot.loaded_at(),
                theme_filter: &query.theme_filter,
                sort_mode: query.sort_mode,
                categories: &self.settings.company_categories,
                preview_limit: self.settings.insight_preview_limit,
            },
        ))
    }

    /// Snapshot id the cached analysis belongs to, if any.
    pub async fn cached_snapshot(&self) -> Option<SnapshotId> {
        self.cache.lock().await.as_ref().map(|(id, _)| *id)
    }

    async fn analysis_for(&self, snapshot: &AuditSnapshot) -> Arc<AuditAnalysis> {
        let mut cache = self.cache.lock().await;

        if let Some((id, analysis)) = cache.as_ref() {
            if *id == snapshot.id() {
                return Arc::clone(analysis);
            }
        }

        debug!(snapshot_id = %snapshot.id(), records = snapshot.len(), "Recomputing audit analysis");
        let analysis = Arc::new(AuditAnalysis::run(snapshot.records()));
        *cache = Some((snapshot.id(), Arc::clone(&analysis)));
        analysis
    }
}
