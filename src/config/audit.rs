//! Audit presentation configuration

use serde::Deserialize;
use std::collections::HashSet;

use super::ValidationError;
use crate::domain::dashboard::CompanyCategory;

/// How the audit dashboard groups and truncates its output
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSettings {
    /// Column groups, in display order
    #[serde(default = "default_company_categories")]
    pub company_categories: Vec<CompanyCategory>,

    /// Entries shown per insight list
    #[serde(default = "default_insight_preview_limit")]
    pub insight_preview_limit: usize,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            company_categories: default_company_categories(),
            insight_preview_limit: default_insight_preview_limit(),
        }
    }
}

impl AuditSettings {
    /// Validate audit settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.insight_preview_limit == 0 {
            return Err(ValidationError::InvalidPreviewLimit);
        }

        let mut seen = HashSet::new();
        for category in &self.company_categories {
            if category.name.trim().is_empty() {
                return Err(ValidationError::EmptyCategoryName);
            }
            for company in &category.companies {
                if !seen.insert(company.as_str()) {
                    return Err(ValidationError::DuplicateCompany(company.clone()));
                }
            }
        }

        Ok(())
    }
}

fn default_company_categories() -> Vec<CompanyCategory> {
    vec![
        CompanyCategory::new(
            "Competitors",
            ["Quilter", "Transact", "Aviva", "AJ Bell", "Aberdeen"],
        ),
        CompanyCategory::new("Fintechs", ["Monzo", "Revolut", "Wise"]),
        CompanyCategory::new("Market Leaders", ["Netflix", "Amazon", "OpenAI"]),
    ]
}

fn default_insight_preview_limit() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AuditSettings::default();
        assert_eq!(settings.insight_preview_limit, 8);
        assert_eq!(settings.company_categories.len(), 3);
        assert_eq!(settings.company_categories[1].name, "Fintechs");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_preview_limit_rejected() {
        let settings = AuditSettings {
            insight_preview_limit: 0,
            ..AuditSettings::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::InvalidPreviewLimit));
    }

    #[test]
    fn test_empty_category_name_rejected() {
        let settings = AuditSettings {
            company_categories: vec![CompanyCategory::new("  ", ["Aviva"])],
            ..AuditSettings::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::EmptyCategoryName));
    }

    #[test]
    fn test_duplicate_company_rejected() {
        let settings = AuditSettings {
            company_categories: vec![
                CompanyCategory::new("Banks", ["Aviva", "Monzo"]),
                CompanyCategory::new("Apps", ["Monzo"]),
            ],
            ..AuditSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ValidationError::DuplicateCompany("Monzo".to_string()))
        );
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let json = r#"{ "insight_preview_limit": 3 }"#;
        let settings: AuditSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.insight_preview_limit, 3);
        assert_eq!(settings.company_categories[0].companies[0], "Quilter");
    }
}
