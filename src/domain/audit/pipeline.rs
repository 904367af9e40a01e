//! Audit pipeline - normalize, aggregate, classify over one snapshot.

use std::collections::HashMap;
use tracing::debug;

use super::{
    CompanyStats, InsightClassifier, Insights, RawRecord, RecordNormalizer, ScoreAggregator,
    SortMode, TacticAggregate, ThemeFilter, ThemeOrder, ViewProjector,
};

/// Everything derived from one set of raw rows.
///
/// Recomputed in full whenever the rows change; views are projected from
/// it on demand and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditAnalysis {
    /// Classified tactics in first-appearance order.
    pub tactics: Vec<TacticAggregate>,
    pub insights: Insights,
    pub company_stats: HashMap<String, CompanyStats>,
    /// Distinct companies in first-appearance order.
    pub companies: Vec<String>,
    pub themes: ThemeOrder,
}

impl AuditAnalysis {
    /// Runs the full pipeline over the rows.
    pub fn run(records: &[RawRecord]) -> Self {
        let themes = ThemeOrder::from_records(records);
        let companies = RecordNormalizer::companies(records);

        let normalized = RecordNormalizer::normalize(records);
        let (aggregated, company_stats) =
            ScoreAggregator::aggregate(&normalized, &companies, &themes);
        let (tactics, insights) = InsightClassifier::classify(&aggregated, &themes);

        debug!(
            records = records.len(),
            tactics = tactics.len(),
            companies = companies.len(),
            themes = themes.len(),
            uncontested = insights.uncontested.len(),
            battlegrounds = insights.battlegrounds.len(),
            "Audit analysis computed"
        );

        Self {
            tactics,
            insights,
            company_stats,
            companies,
            themes,
        }
    }

    /// Filtered and sorted view over the classified tactics.
    pub fn project(&self, filter: &ThemeFilter, sort: SortMode) -> Vec<TacticAggregate> {
        ViewProjector::project(&self.tactics, filter, sort, &self.themes)
    }

    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }
}
