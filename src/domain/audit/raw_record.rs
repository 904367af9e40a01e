//! Raw evaluation rows and their conversion from loader output.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{Score, ValidationError};

/// One company's evaluation of one tactic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub company: String,
    pub theme: String,
    pub tactic_id: i64,
    pub tactic_name: String,
    /// `None` when the company was not evaluated or the cell was malformed.
    pub score: Option<Score>,
    pub evidence: String,
}

impl RawRecord {
    /// Creates a record without evidence text.
    pub fn new(
        company: impl Into<String>,
        theme: impl Into<String>,
        tactic_id: i64,
        tactic_name: impl Into<String>,
        score: Option<Score>,
    ) -> Self {
        Self {
            company: company.into(),
            theme: theme.into(),
            tactic_id,
            tactic_name: tactic_name.into(),
            score,
            evidence: String::new(),
        }
    }

    /// Attaches evidence text.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }

    /// Converts loader rows, dropping those without a company or tactic id.
    pub fn from_boundary_rows(rows: impl IntoIterator<Item = BoundaryRow>) -> Vec<RawRecord> {
        let mut dropped = 0usize;
        let records: Vec<RawRecord> = rows
            .into_iter()
            .filter_map(|row| match RawRecord::try_from(row) {
                Ok(record) => Some(record),
                Err(_) => {
                    dropped += 1;
                    None
                }
            })
            .collect();

        if dropped > 0 {
            warn!(dropped, kept = records.len(), "Dropped rows missing company or tactic id");
        }

        records
    }
}

/// A row exactly as the loader hands it over: every column a string.
///
/// Field names follow the audit CSV header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryRow {
    #[serde(rename = "Company", default)]
    pub company: Option<String>,
    #[serde(rename = "Theme", default)]
    pub theme: Option<String>,
    #[serde(rename = "Tactic_ID", default)]
    pub tactic_id: Option<String>,
    #[serde(rename = "Tactic_Name", default)]
    pub tactic_name: Option<String>,
    #[serde(rename = "Score", default)]
    pub score: Option<String>,
    #[serde(rename = "Evidence", default)]
    pub evidence: Option<String>,
}

impl TryFrom<BoundaryRow> for RawRecord {
    type Error = ValidationError;

    fn try_from(row: BoundaryRow) -> Result<Self, Self::Error> {
        let company = row
            .company
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ValidationError::empty_field("Company"))?;

        let raw_id = row
            .tactic_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ValidationError::empty_field("Tactic_ID"))?;
        let tactic_id = parse_leading_int(&raw_id).ok_or_else(|| {
            ValidationError::invalid_format("Tactic_ID", format!("'{}' is not an integer", raw_id))
        })?;

        Ok(Self {
            company,
            theme: row.theme.unwrap_or_default(),
            tactic_id,
            tactic_name: row.tactic_name.unwrap_or_default(),
            score: row.score.as_deref().and_then(parse_score),
            evidence: row.evidence.unwrap_or_default(),
        })
    }
}

/// Parses a score cell; anything that is not an integer in 1..=5 is absent.
pub fn parse_score(raw: &str) -> Option<Score> {
    let value = parse_leading_int(raw)?;
    let value = u8::try_from(value).ok()?;
    Score::try_from_u8(value).ok()
}

/// Reads the leading integer of a cell, ignoring any trailing text.
///
/// `" 12"` and `"12abc"` both read as 12; `"abc"` and `""` read as nothing.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
