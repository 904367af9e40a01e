//! Audit Module - Pure domain services for the competitive audit matrix.
//!
//! Raw company × tactic rows flow one way through stateless stages:
//!
//! - `RecordNormalizer` - Groups rows into tactic aggregates
//! - `ScoreAggregator` - Tactic, company and theme averages
//! - `InsightClassifier` - Uncontested / battleground / mixed tagging, theme ranking
//! - `ViewProjector` - Theme filter and sort mode for presentation
//!
//! `AuditAnalysis` chains the first three; views are projected from it on demand.
//! Nothing here performs I/O or holds state between calls.

mod insight_classifier;
mod pipeline;
mod raw_record;
mod record_normalizer;
mod score_aggregator;
mod snapshot;
mod tactic_aggregate;
mod theme_order;
mod view_projector;

pub use insight_classifier::{
    InsightClassifier, Insights, ThemeAverage, BATTLEGROUND_AVG_MIN, CONSENSUS_SHARE,
    MIXED_SPREAD_MIN, UNCONTESTED_AVG_MAX,
};
pub use pipeline::AuditAnalysis;
pub use raw_record::{parse_score, BoundaryRow, RawRecord};
pub use record_normalizer::RecordNormalizer;
pub use score_aggregator::{CompanyStats, ScoreAggregator};
pub use snapshot::AuditSnapshot;
pub use tactic_aggregate::{TacticAggregate, TacticKey};
pub use theme_order::ThemeOrder;
pub use view_projector::{SortMode, ThemeFilter, ViewProjector};
