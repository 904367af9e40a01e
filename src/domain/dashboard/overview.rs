use serde::Serialize;
use std::collections::HashMap;

use super::{CategoryHeader, CompanyCategory, CompanyColumn, CompanyLayout};
use crate::domain::audit::{
    AuditAnalysis, CompanyStats, Insights, SortMode, TacticAggregate, ThemeFilter, ViewProjector,
};
use crate::domain::foundation::{Score, SnapshotId, Timestamp};

/// The audit dashboard - matrix, insights and company averages for one view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOverview {
    /// Snapshot the view was derived from
    pub snapshot_id: SnapshotId,
    pub loaded_at: Timestamp,

    /// View selection
    pub theme_filter: ThemeFilter,
    pub sort_mode: SortMode,

    /// Matrix dimensions over the whole snapshot, independent of the filter
    pub company_count: usize,
    pub tactic_count: usize,

    /// Company columns and the category headers above them
    pub columns: Vec<CompanyColumn>,
    pub categories: Vec<CategoryHeader>,

    /// Themes in first-appearance order (filter options)
    pub themes: Vec<String>,

    /// Matrix rows for the current filter and sort
    pub rows: Vec<MatrixRow>,

    /// Insight lists, truncated to the preview limit
    pub insights: Insights,

    pub company_stats: HashMap<String, CompanyStats>,
}

/// One tactic row of the matrix
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    #[serde(flatten)]
    pub tactic: TacticAggregate,
    /// True where a theme group header precedes the row (natural order only)
    pub starts_theme_group: bool,
    /// Rounded band of the tactic average
    pub average_band: Option<Score>,
}

/// Inputs describing which view to build
#[derive(Debug, Clone)]
pub struct OverviewRequest<'a> {
    pub snapshot_id: SnapshotId,
    pub loaded_at: Timestamp,
    pub theme_filter: &'a ThemeFilter,
    pub sort_mode: SortMode,
    pub categories: &'a [CompanyCategory],
    pub preview_limit: usize,
}

impl AuditOverview {
    /// Builds the dashboard view from an analysis.
    pub fn build(analysis: &AuditAnalysis, request: OverviewRequest<'_>) -> Self {
        let view = analysis.project(request.theme_filter, request.sort_mode);
        let boundaries = ViewProjector::theme_boundaries(&view, request.sort_mode);

        let rows = view
            .into_iter()
            .zip(boundaries)
            .map(|(tactic, starts_theme_group)| MatrixRow {
                average_band: Score::nearest(tactic.avg_score),
                starts_theme_group,
                tactic,
            })
            .collect();

        let layout = CompanyLayout::arrange(
            request.categories,
            &analysis.companies,
            &analysis.company_stats,
        );

        Self {
            snapshot_id: request.snapshot_id,
            loaded_at: request.loaded_at,
            theme_filter: request.theme_filter.clone(),
            sort_mode: request.sort_mode,
            company_count: analysis.companies.len(),
            tactic_count: analysis.tactics.len(),
            columns: layout.columns,
            categories: layout.headers,
            themes: analysis.themes.themes().to_vec(),
            rows,
            insights: analysis.insights.preview(request.preview_limit),
            company_stats: analysis.company_stats.clone(),
        }
    }

    /// Header subtitle, e.g. "11 companies × 40 tactics".
    pub fn subtitle(&self) -> String {
        format!(
            "{} companies × {} tactics",
            self.company_count, self.tactic_count
        )
    }

    pub fn is_empty(&self) -> bool {
        self.tactic_count == 0
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
