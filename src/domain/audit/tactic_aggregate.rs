//! Tactic aggregate - one pivoted row of the comparison matrix.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::RawRecord;
use crate::domain::foundation::Score;

/// Identity of a tactic: theme, numeric id and name together.
///
/// Two rows with the same id but a different name or theme are
/// different tactics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TacticKey {
    pub theme: String,
    pub tactic_id: i64,
    pub tactic_name: String,
}

impl TacticKey {
    /// Builds the grouping key of a raw row.
    pub fn of(record: &RawRecord) -> Self {
        Self {
            theme: record.theme.clone(),
            tactic_id: record.tactic_id,
            tactic_name: record.tactic_name.clone(),
        }
    }
}

/// All companies' scores for one tactic, plus derived statistics.
///
/// `scores_by_company` holds an entry for every company that has a row for
/// this tactic; the entry is `None` when that row carried no usable score.
/// Derived fields are zero/false until the aggregator and classifier run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TacticAggregate {
    pub theme: String,
    pub tactic_id: i64,
    pub tactic_name: String,
    pub scores_by_company: HashMap<String, Option<Score>>,
    pub evidences_by_company: HashMap<String, String>,
    /// Mean of present scores; 0 when none are present.
    pub avg_score: f64,
    pub low_scorers: usize,
    pub high_scorers: usize,
    pub min_score: Option<Score>,
    pub max_score: Option<Score>,
    /// Sample standard deviation of present scores; needs at least two.
    pub spread: Option<f64>,
    pub is_uncontested: bool,
    pub is_battleground: bool,
    pub is_mixed: bool,
}

impl TacticAggregate {
    /// Creates an empty aggregate for a tactic.
    pub fn new(theme: impl Into<String>, tactic_id: i64, tactic_name: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            tactic_id,
            tactic_name: tactic_name.into(),
            scores_by_company: HashMap::new(),
            evidences_by_company: HashMap::new(),
            avg_score: 0.0,
            low_scorers: 0,
            high_scorers: 0,
            min_score: None,
            max_score: None,
            spread: None,
            is_uncontested: false,
            is_battleground: false,
            is_mixed: false,
        }
    }

    /// Creates an empty aggregate for the tactic a raw row belongs to.
    pub fn for_record(record: &RawRecord) -> Self {
        Self::new(record.theme.clone(), record.tactic_id, record.tactic_name.clone())
    }

    /// Returns the identity key.
    pub fn key(&self) -> TacticKey {
        TacticKey {
            theme: self.theme.clone(),
            tactic_id: self.tactic_id,
            tactic_name: self.tactic_name.clone(),
        }
    }

    /// Stores one company's evaluation, replacing any earlier one.
    pub fn record(&mut self, company: &str, score: Option<Score>, evidence: &str) {
        self.scores_by_company.insert(company.to_string(), score);
        self.evidences_by_company
            .insert(company.to_string(), evidence.to_string());
    }

    /// Returns the company's score, `None` if absent or not evaluated.
    pub fn score_for(&self, company: &str) -> Option<Score> {
        self.scores_by_company.get(company).copied().flatten()
    }

    /// Returns the company's evidence text, if it has a row for this tactic.
    pub fn evidence_for(&self, company: &str) -> Option<&str> {
        self.evidences_by_company.get(company).map(String::as_str)
    }

    /// Iterates over present scores, in no particular order.
    pub fn present_scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.scores_by_company.values().filter_map(|s| *s)
    }

    /// Number of companies with a present score.
    pub fn present_count(&self) -> usize {
        self.present_scores().count()
    }
}
