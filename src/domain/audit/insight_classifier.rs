//! Insight Classifier - uncontested opportunities, battlegrounds and theme ranking.

use serde::{Deserialize, Serialize};

use super::{TacticAggregate, ThemeOrder, ViewProjector};

/// Averages at or below this mark a tactic uncontested.
pub const UNCONTESTED_AVG_MAX: f64 = 2.0;

/// Averages at or above this mark a tactic a battleground.
pub const BATTLEGROUND_AVG_MIN: f64 = 4.0;

/// Share of scorers on one side that makes a consensus.
pub const CONSENSUS_SHARE: f64 = 0.7;

/// Sample standard deviation at or above which scores are considered split.
pub const MIXED_SPREAD_MIN: f64 = 1.5;

/// Mean tactic average of one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeAverage {
    pub theme: String,
    pub avg: f64,
}

/// Classified tactic lists and the theme ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Most companies score low, ascending by average.
    pub uncontested: Vec<TacticAggregate>,
    /// Most companies score high, descending by average.
    pub battlegrounds: Vec<TacticAggregate>,
    /// Companies disagree strongly, descending by spread.
    pub mixed: Vec<TacticAggregate>,
    /// Descending by average.
    pub theme_averages: Vec<ThemeAverage>,
}

impl Insights {
    /// Keeps the first `limit` tactics of each list. Theme averages are kept whole.
    pub fn preview(&self, limit: usize) -> Self {
        let head = |list: &[TacticAggregate]| -> Vec<TacticAggregate> {
            list.iter().take(limit).cloned().collect()
        };
        Self {
            uncontested: head(&self.uncontested),
            battlegrounds: head(&self.battlegrounds),
            mixed: head(&self.mixed),
            theme_averages: self.theme_averages.clone(),
        }
    }
}

/// Threshold classification over aggregated tactics.
pub struct InsightClassifier;

impl InsightClassifier {
    /// Flags every tactic and builds the insight lists.
    ///
    /// Returned tactics keep the input order. Insight lists are drawn from
    /// the tactics in natural order (theme rank, then tactic id) and sorted
    /// stably, so ties come out in natural order.
    pub fn classify(
        tactics: &[TacticAggregate],
        themes: &ThemeOrder,
    ) -> (Vec<TacticAggregate>, Insights) {
        let flagged: Vec<TacticAggregate> = tactics
            .iter()
            .map(|t| TacticAggregate {
                is_uncontested: Self::is_uncontested(t),
                is_battleground: Self::is_battleground(t),
                is_mixed: Self::is_mixed(t),
                ..t.clone()
            })
            .collect();

        let mut natural: Vec<&TacticAggregate> = flagged.iter().collect();
        natural.sort_by(|a, b| ViewProjector::natural_order(a, b, themes));

        let pick = |keep: fn(&TacticAggregate) -> bool| -> Vec<TacticAggregate> {
            natural.iter().filter(|t| keep(t)).map(|t| (*t).clone()).collect()
        };

        let mut uncontested = pick(|t| t.is_uncontested);
        uncontested.sort_by(|a, b| a.avg_score.total_cmp(&b.avg_score));

        let mut battlegrounds = pick(|t| t.is_battleground);
        battlegrounds.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));

        let mut mixed = pick(|t| t.is_mixed);
        mixed.sort_by(|a, b| {
            let a_spread = a.spread.unwrap_or(0.0);
            b.spread.unwrap_or(0.0).total_cmp(&a_spread)
        });

        let insights = Insights {
            uncontested,
            battlegrounds,
            mixed,
            theme_averages: Self::theme_averages(&flagged, themes),
        };

        (flagged, insights)
    }

    /// Average ≤ 2, or at least 70% of present scores are ≤ 2.
    ///
    /// A tactic nobody was scored on is never uncontested.
    pub fn is_uncontested(tactic: &TacticAggregate) -> bool {
        let present = tactic.present_count();
        if present == 0 {
            return false;
        }
        tactic.avg_score <= UNCONTESTED_AVG_MAX
            || tactic.low_scorers as f64 >= CONSENSUS_SHARE * present as f64
    }

    /// Average ≥ 4, or at least 70% of present scores are ≥ 4.
    ///
    /// A tactic nobody was scored on is never a battleground.
    pub fn is_battleground(tactic: &TacticAggregate) -> bool {
        let present = tactic.present_count();
        if present == 0 {
            return false;
        }
        tactic.avg_score >= BATTLEGROUND_AVG_MIN
            || tactic.high_scorers as f64 >= CONSENSUS_SHARE * present as f64
    }

    /// Sample spread ≥ 1.5; needs at least two scores.
    pub fn is_mixed(tactic: &TacticAggregate) -> bool {
        tactic.spread.is_some_and(|s| s >= MIXED_SPREAD_MIN)
    }

    /// Mean of tactic averages per theme, highest first.
    ///
    /// A theme with no tactics averages 0.
    pub fn theme_averages(tactics: &[TacticAggregate], themes: &ThemeOrder) -> Vec<ThemeAverage> {
        let mut averages: Vec<ThemeAverage> = themes
            .themes()
            .iter()
            .map(|theme| {
                let (sum, count) = tactics
                    .iter()
                    .filter(|t| &t.theme == theme)
                    .fold((0.0, 0usize), |(sum, count), t| (sum + t.avg_score, count + 1));
                let avg = if count == 0 { 0.0 } else { sum / count as f64 };
                ThemeAverage {
                    theme: theme.clone(),
                    avg,
                }
            })
            .collect();

        averages.sort_by(|a, b| b.avg.total_cmp(&a.avg));
        averages
    }
}
