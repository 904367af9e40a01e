//! View Projector - filtered, sorted views over classified tactics.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{TacticAggregate, ThemeOrder};
use crate::domain::foundation::ValidationError;

/// Which themes a view keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeFilter {
    #[default]
    All,
    Theme(String),
}

impl ThemeFilter {
    pub fn theme(theme: impl Into<String>) -> Self {
        ThemeFilter::Theme(theme.into())
    }

    pub fn matches(&self, theme: &str) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Theme(selected) => selected == theme,
        }
    }
}

impl From<String> for ThemeFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            ThemeFilter::All
        } else {
            ThemeFilter::Theme(value)
        }
    }
}

impl From<ThemeFilter> for String {
    fn from(filter: ThemeFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for ThemeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeFilter::All => write!(f, "all"),
            ThemeFilter::Theme(theme) => write!(f, "{}", theme),
        }
    }
}

/// Row ordering of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Themes by first appearance, then ascending tactic id.
    #[default]
    #[serde(alias = "tactic")]
    Natural,
    AvgAsc,
    AvgDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Natural => "natural",
            SortMode::AvgAsc => "avg-asc",
            SortMode::AvgDesc => "avg-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" | "tactic" => Ok(SortMode::Natural),
            "avg-asc" => Ok(SortMode::AvgAsc),
            "avg-desc" => Ok(SortMode::AvgDesc),
            other => Err(ValidationError::invalid_format(
                "sort_mode",
                format!("unknown sort mode '{}'", other),
            )),
        }
    }
}

/// Produces presentation views without touching the source tactics.
pub struct ViewProjector;

impl ViewProjector {
    /// Filters by theme, then orders by the sort mode.
    ///
    /// Average sorts break ties by natural order. `theme_order` must come
    /// from the unfiltered rows so theme positions do not depend on the
    /// filter.
    pub fn project(
        tactics: &[TacticAggregate],
        filter: &ThemeFilter,
        sort: SortMode,
        theme_order: &ThemeOrder,
    ) -> Vec<TacticAggregate> {
        let mut view: Vec<TacticAggregate> = tactics
            .iter()
            .filter(|t| filter.matches(&t.theme))
            .cloned()
            .collect();

        view.sort_by(|a, b| Self::natural_order(a, b, theme_order));

        match sort {
            SortMode::Natural => {}
            SortMode::AvgAsc => view.sort_by(|a, b| a.avg_score.total_cmp(&b.avg_score)),
            SortMode::AvgDesc => view.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score)),
        }

        view
    }

    /// Theme position first, tactic id second.
    pub fn natural_order(a: &TacticAggregate, b: &TacticAggregate, theme_order: &ThemeOrder) -> Ordering {
        theme_order
            .rank(&a.theme)
            .cmp(&theme_order.rank(&b.theme))
            .then_with(|| a.tactic_id.cmp(&b.tactic_id))
    }

    /// One flag per row: true where a theme group header belongs.
    ///
    /// Only natural order groups by theme; other sorts never start a group.
    pub fn theme_boundaries(view: &[TacticAggregate], sort: SortMode) -> Vec<bool> {
        if sort != SortMode::Natural {
            return vec![false; view.len()];
        }

        view.iter()
            .enumerate()
            .map(|(idx, tactic)| idx == 0 || view[idx - 1].theme != tactic.theme)
            .collect()
    }
}
