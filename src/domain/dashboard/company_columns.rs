//! Company column layout for the audit matrix.
//!
//! Column order is presentation configuration: companies are grouped under
//! named categories, and anything the categories do not mention is appended
//! under a trailing "Other" header in first-appearance order.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::audit::CompanyStats;
use crate::domain::foundation::Score;

/// Header shown over companies no configured category lists.
pub const OTHER_CATEGORY: &str = "Other";

/// A named group of companies, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCategory {
    pub name: String,
    pub companies: Vec<String>,
}

impl CompanyCategory {
    pub fn new<I, S>(name: impl Into<String>, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            companies: companies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, company: &str) -> bool {
        self.companies.iter().any(|c| c == company)
    }
}

/// One company column of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyColumn {
    pub company: String,
    /// Category name; None for companies no category lists.
    pub category: Option<String>,
    /// True for the first column under a category header.
    pub starts_category: bool,
    pub overall_avg: f64,
    /// Rounded band of `overall_avg`; None when the company has no scores.
    pub band: Option<Score>,
}

/// A category header spanning `span` adjacent columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHeader {
    pub name: String,
    pub span: usize,
}

/// Ordered columns plus the headers grouping them.
///
/// Header spans always sum to the number of columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLayout {
    pub columns: Vec<CompanyColumn>,
    pub headers: Vec<CategoryHeader>,
}

impl CompanyLayout {
    /// Lays out the present companies under the configured categories.
    ///
    /// Categories keep their configured order and member order, reduced to
    /// companies that actually appear. Categories with no present member
    /// produce no header. A company listed by more than one category is
    /// placed under the first.
    pub fn arrange(
        categories: &[CompanyCategory],
        companies: &[String],
        stats: &HashMap<String, CompanyStats>,
    ) -> Self {
        let present: HashSet<&str> = companies.iter().map(String::as_str).collect();
        let mut placed: HashSet<&str> = HashSet::new();
        let mut layout = Self::default();

        for category in categories {
            let members: Vec<&str> = category
                .companies
                .iter()
                .map(String::as_str)
                .filter(|c| present.contains(c))
                .filter(|c| placed.insert(*c))
                .collect();
            layout.push_group(Some(category.name.as_str()), &members, stats);
        }

        let others: Vec<&str> = companies
            .iter()
            .map(String::as_str)
            .filter(|c| !placed.contains(c))
            .collect();
        layout.push_group(None, &others, stats);

        layout
    }

    /// Company names in column order.
    pub fn companies(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.company.as_str()).collect()
    }

    fn push_group(
        &mut self,
        category: Option<&str>,
        members: &[&str],
        stats: &HashMap<String, CompanyStats>,
    ) {
        if members.is_empty() {
            return;
        }

        self.headers.push(CategoryHeader {
            name: category.unwrap_or(OTHER_CATEGORY).to_string(),
            span: members.len(),
        });

        for (idx, company) in members.iter().enumerate() {
            let overall_avg = stats.get(*company).map(|s| s.overall_avg).unwrap_or(0.0);
            self.columns.push(CompanyColumn {
                company: company.to_string(),
                category: category.map(str::to_string),
                starts_category: idx == 0,
                overall_avg,
                band: Score::nearest(overall_avg),
            });
        }
    }
}
