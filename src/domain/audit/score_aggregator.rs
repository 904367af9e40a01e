//! Score Aggregator - tactic, company and theme level averages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TacticAggregate, ThemeOrder};
use crate::domain::foundation::Score;

/// A company's averages across the audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub company: String,
    /// Mean of every present score of the company; 0 when none.
    pub overall_avg: f64,
    /// Mean per theme, one entry per known theme; 0 when none in that theme.
    pub theme_avgs: HashMap<String, f64>,
    /// Number of present scores, not number of tactics in the audit.
    pub total_tactics: usize,
}

impl CompanyStats {
    /// Average for a theme, 0 for themes without scores or unknown themes.
    pub fn theme_avg(&self, theme: &str) -> f64 {
        self.theme_avgs.get(theme).copied().unwrap_or(0.0)
    }
}

/// Sum and count of scores; mean defaults to 0 when empty.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: u32,
    count: usize,
}

impl Tally {
    fn push(&mut self, score: Score) {
        self.sum += u32::from(score.value());
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }
}

/// Averaging over normalized tactics.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Computes tactic statistics and per-company averages.
    ///
    /// Only present scores count. A company without a row for a tactic, or
    /// with an unusable score, is left out of every average rather than
    /// counted as zero.
    ///
    /// Stats are produced for every company in `companies`, with a theme
    /// entry for every theme in `themes`.
    pub fn aggregate(
        tactics: &[TacticAggregate],
        companies: &[String],
        themes: &ThemeOrder,
    ) -> (Vec<TacticAggregate>, HashMap<String, CompanyStats>) {
        let enriched = tactics.iter().map(Self::summarize_tactic).collect();
        let stats = Self::company_stats(tactics, companies, themes);
        (enriched, stats)
    }

    /// Fills in average, low/high counts, min, max and spread for one tactic.
    pub fn summarize_tactic(tactic: &TacticAggregate) -> TacticAggregate {
        let mut scores: Vec<Score> = tactic.present_scores().collect();
        scores.sort_unstable();

        let mut tally = Tally::default();
        for score in &scores {
            tally.push(*score);
        }
        let avg_score = tally.mean();

        TacticAggregate {
            avg_score,
            low_scorers: scores.iter().filter(|s| s.is_low()).count(),
            high_scorers: scores.iter().filter(|s| s.is_high()).count(),
            min_score: scores.first().copied(),
            max_score: scores.last().copied(),
            spread: sample_std_dev(&scores, avg_score),
            ..tactic.clone()
        }
    }

    fn company_stats(
        tactics: &[TacticAggregate],
        companies: &[String],
        themes: &ThemeOrder,
    ) -> HashMap<String, CompanyStats> {
        let mut overall: HashMap<&str, Tally> = HashMap::new();
        let mut by_theme: HashMap<(&str, &str), Tally> = HashMap::new();

        for tactic in tactics {
            for (company, score) in &tactic.scores_by_company {
                let Some(score) = score else { continue };
                overall.entry(company.as_str()).or_default().push(*score);
                by_theme
                    .entry((company.as_str(), tactic.theme.as_str()))
                    .or_default()
                    .push(*score);
            }
        }

        companies
            .iter()
            .map(|company| {
                let tally = overall.get(company.as_str()).copied().unwrap_or_default();
                let theme_avgs = themes
                    .themes()
                    .iter()
                    .map(|theme| {
                        let avg = by_theme
                            .get(&(company.as_str(), theme.as_str()))
                            .map(Tally::mean)
                            .unwrap_or(0.0);
                        (theme.clone(), avg)
                    })
                    .collect();

                let stats = CompanyStats {
                    company: company.clone(),
                    overall_avg: tally.mean(),
                    theme_avgs,
                    total_tactics: tally.count,
                };
                (company.clone(), stats)
            })
            .collect()
    }
}

/// Sample standard deviation (n - 1 denominator).
fn sample_std_dev(scores: &[Score], mean: f64) -> Option<f64> {
    if scores.len() < 2 {
        return None;
    }
    let squares: f64 = scores
        .iter()
        .map(|s| (f64::from(s.value()) - mean).powi(2))
        .sum();
    Some((squares / (scores.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::{RawRecord, RecordNormalizer};

    fn row(company: &str, theme: &str, id: i64, score: Option<u8>) -> RawRecord {
        RawRecord::new(
            company,
            theme,
            id,
            format!("T{}", id),
            score.and_then(|s| Score::try_from_u8(s).ok()),
        )
    }

    fn run(records: &[RawRecord]) -> (Vec<TacticAggregate>, HashMap<String, CompanyStats>) {
        let tactics = RecordNormalizer::normalize(records);
        let companies = RecordNormalizer::companies(records);
        let themes = ThemeOrder::from_records(records);
        ScoreAggregator::aggregate(&tactics, &companies, &themes)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn aggregate_empty_input() {
        let (tactics, stats) = run(&[]);
        assert!(tactics.is_empty());
        assert!(stats.is_empty());
    }

    #[test]
    fn tactic_average_uses_present_scores_only() {
        let records = vec![
            row("A", "X", 1, Some(4)),
            row("B", "X", 1, None),
            row("C", "X", 1, Some(2)),
        ];

        let (tactics, _) = run(&records);
        assert_close(tactics[0].avg_score, 3.0);
        assert_eq!(tactics[0].low_scorers, 1);
        assert_eq!(tactics[0].high_scorers, 1);
    }

    #[test]
    fn tactic_without_scores_averages_zero() {
        let records = vec![row("A", "X", 1, None), row("B", "X", 1, None)];

        let (tactics, _) = run(&records);
        assert_eq!(tactics[0].avg_score, 0.0);
        assert_eq!(tactics[0].min_score, None);
        assert_eq!(tactics[0].spread, None);
    }

    #[test]
    fn moderate_scores_are_neither_low_nor_high() {
        let records = vec![row("A", "X", 1, Some(3)), row("B", "X", 1, Some(3))];

        let (tactics, _) = run(&records);
        assert_eq!(tactics[0].low_scorers, 0);
        assert_eq!(tactics[0].high_scorers, 0);
        assert_close(tactics[0].spread.unwrap(), 0.0);
    }

    #[test]
    fn tactic_min_max_and_spread() {
        let records = vec![
            row("A", "X", 1, Some(1)),
            row("B", "X", 1, Some(3)),
            row("C", "X", 1, Some(5)),
        ];

        let (tactics, _) = run(&records);
        assert_eq!(tactics[0].min_score, Some(Score::NoEvidence));
        assert_eq!(tactics[0].max_score, Some(Score::Strong));
        // deviations -2, 0, 2 -> 8 / 2 = 4 -> sqrt = 2
        assert_close(tactics[0].spread.unwrap(), 2.0);
    }

    #[test]
    fn single_score_has_no_spread() {
        let (tactics, _) = run(&[row("A", "X", 1, Some(4))]);
        assert_eq!(tactics[0].spread, None);
        assert_eq!(tactics[0].min_score, tactics[0].max_score);
    }

    #[test]
    fn company_overall_average_and_count() {
        let records = vec![
            row("A", "X", 1, Some(1)),
            row("B", "X", 1, Some(2)),
            row("A", "X", 2, Some(5)),
            row("B", "X", 2, Some(4)),
            row("A", "Y", 3, None),
        ];

        let (_, stats) = run(&records);
        assert_close(stats["A"].overall_avg, 3.0);
        assert_eq!(stats["A"].total_tactics, 2);
        assert_close(stats["B"].overall_avg, 3.0);
    }

    #[test]
    fn company_without_scores_in_theme_averages_zero() {
        let records = vec![
            row("A", "X", 1, Some(4)),
            row("A", "Y", 2, None),
            row("B", "Y", 2, Some(2)),
        ];

        let (_, stats) = run(&records);
        assert_close(stats["A"].theme_avg("X"), 4.0);
        assert_eq!(stats["A"].theme_avg("Y"), 0.0);
        assert_eq!(stats["A"].theme_avgs.len(), 2);
        assert_eq!(stats["B"].theme_avg("X"), 0.0);
        assert_close(stats["B"].theme_avg("Y"), 2.0);
    }

    #[test]
    fn company_with_only_absent_scores_has_zero_stats() {
        let records = vec![row("A", "X", 1, Some(3)), row("Ghost", "X", 1, None)];

        let (_, stats) = run(&records);
        assert_eq!(stats["Ghost"].overall_avg, 0.0);
        assert_eq!(stats["Ghost"].total_tactics, 0);
    }

    #[test]
    fn company_stats_use_deduplicated_scores() {
        let records = vec![row("A", "X", 1, Some(5)), row("A", "X", 1, Some(1))];

        let (_, stats) = run(&records);
        assert_close(stats["A"].overall_avg, 1.0);
        assert_eq!(stats["A"].total_tactics, 1);
    }

    #[test]
    fn unknown_theme_lookup_defaults_to_zero() {
        let (_, stats) = run(&[row("A", "X", 1, Some(5))]);
        assert_eq!(stats["A"].theme_avg("Nope"), 0.0);
    }
}
