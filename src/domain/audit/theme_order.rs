//! Theme ordering by first appearance in the raw rows.

use std::collections::HashMap;

use super::RawRecord;

/// Ordered list of distinct themes with O(1) rank lookup.
///
/// Themes not in the list rank after every listed theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOrder {
    themes: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl ThemeOrder {
    /// Distinct non-empty themes in order of first appearance.
    pub fn from_records(records: &[RawRecord]) -> Self {
        Self::from_themes(records.iter().map(|r| r.theme.as_str()))
    }

    /// Builds an ordering from themes, dropping empties and repeats.
    pub fn from_themes<I, S>(themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut order = Self::default();
        for theme in themes {
            let theme = theme.as_ref();
            if theme.is_empty() || order.ranks.contains_key(theme) {
                continue;
            }
            order.ranks.insert(theme.to_string(), order.themes.len());
            order.themes.push(theme.to_string());
        }
        order
    }

    /// Position of a theme; unknown themes share the last rank.
    pub fn rank(&self, theme: &str) -> usize {
        self.ranks.get(theme).copied().unwrap_or(self.themes.len())
    }

    pub fn contains(&self, theme: &str) -> bool {
        self.ranks.contains_key(theme)
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
