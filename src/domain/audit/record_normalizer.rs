//! Record Normalizer - groups raw rows into tactic aggregates.

use std::collections::{HashMap, HashSet};

use super::{RawRecord, TacticAggregate, TacticKey};

/// Pivots company rows into one aggregate per tactic.
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Groups rows by (theme, tactic id, tactic name).
    ///
    /// Output order is the order in which each key first appears. When two
    /// rows share a key and a company, the later row wins, including when it
    /// carries no score.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - Same id, different name: Two separate aggregates
    pub fn normalize(records: &[RawRecord]) -> Vec<TacticAggregate> {
        let mut slots: HashMap<TacticKey, usize> = HashMap::new();
        let mut tactics: Vec<TacticAggregate> = Vec::new();

        for record in records {
            let slot = *slots.entry(TacticKey::of(record)).or_insert_with(|| {
                tactics.push(TacticAggregate::for_record(record));
                tactics.len() - 1
            });

            tactics[slot].record(&record.company, record.score, &record.evidence);
        }

        tactics
    }

    /// Distinct non-empty companies in order of first appearance.
    pub fn companies(records: &[RawRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter(|r| !r.company.is_empty())
            .filter(|r| seen.insert(r.company.as_str()))
            .map(|r| r.company.clone())
            .collect()
    }
}
