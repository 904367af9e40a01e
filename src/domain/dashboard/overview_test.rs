#[cfg(test)]
mod tests {
    use crate::domain::audit::{AuditAnalysis, RawRecord, SortMode, ThemeFilter};
    use crate::domain::dashboard::company_columns::CompanyCategory;
    use crate::domain::dashboard::overview::{AuditOverview, OverviewRequest};
    use crate::domain::foundation::{Score, SnapshotId, Timestamp};

    fn row(company: &str, theme: &str, id: i64, score: u8) -> RawRecord {
        RawRecord::new(
            company,
            theme,
            id,
            format!("Tactic {}", id),
            Score::try_from_u8(score).ok(),
        )
    }

    fn sample_records() -> Vec<RawRecord> {
        vec![
            row("Monzo", "Onboarding", 1, 1),
            row("Aviva", "Onboarding", 1, 2),
            row("Monzo", "Onboarding", 2, 5),
            row("Aviva", "Onboarding", 2, 4),
            row("Monzo", "Trust", 3, 3),
            row("Aviva", "Trust", 3, 3),
        ]
    }

    fn categories() -> Vec<CompanyCategory> {
        vec![
            CompanyCategory::new("Competitors", ["Aviva"]),
            CompanyCategory::new("Fintechs", ["Monzo"]),
        ]
    }

    fn build(
        analysis: &AuditAnalysis,
        filter: &ThemeFilter,
        sort: SortMode,
        preview_limit: usize,
    ) -> AuditOverview {
        let categories = categories();
        AuditOverview::build(
            analysis,
            OverviewRequest {
                snapshot_id: SnapshotId::new(),
                loaded_at: Timestamp::now(),
                theme_filter: filter,
                sort_mode: sort,
                categories: &categories,
                preview_limit,
            },
        )
    }

    #[test]
    fn test_overview_serializes_camel_case() {
        let analysis = AuditAnalysis::run(&sample_records());
        let overview = build(&analysis, &ThemeFilter::All, SortMode::Natural, 8);

        let json = serde_json::to_value(&overview).unwrap();
        assert!(json.get("snapshotId").is_some());
        assert_eq!(json["themeFilter"], "all");
        assert_eq!(json["sortMode"], "natural");

        let first_row = &json["rows"][0];
        assert_eq!(first_row["tacticId"], 1);
        assert_eq!(first_row["startsThemeGroup"], true);
        assert_eq!(first_row["averageBand"], 2);
    }

    #[test]
    fn test_overview_dimensions_ignore_filter() {
        let analysis = AuditAnalysis::run(&sample_records());
        let overview = build(&analysis, &ThemeFilter::theme("Trust"), SortMode::Natural, 8);

        assert_eq!(overview.rows.len(), 1);
        assert_eq!(overview.company_count, 2);
        assert_eq!(overview.tactic_count, 3);
        assert_eq!(overview.subtitle(), "2 companies × 3 tactics");
        assert_eq!(overview.themes, vec!["Onboarding", "Trust"]);
    }

    #[test]
    fn test_overview_marks_theme_groups_in_natural_order() {
        let analysis = AuditAnalysis::run(&sample_records());
        let overview = build(&analysis, &ThemeFilter::All, SortMode::Natural, 8);

        let flags: Vec<bool> = overview.rows.iter().map(|r| r.starts_theme_group).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_overview_average_sort_has_no_groups() {
        let analysis = AuditAnalysis::run(&sample_records());
        let overview = build(&analysis, &ThemeFilter::All, SortMode::AvgDesc, 8);

        let ids: Vec<i64> = overview.rows.iter().map(|r| r.tactic.tactic_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(overview.rows.iter().all(|r| !r.starts_theme_group));
    }

    #[test]
    fn test_overview_columns_follow_categories() {
        let analysis = AuditAnalysis::run(&sample_records());
        let overview = build(&analysis, &ThemeFilter::All, SortMode::Natural, 8);

        let companies: Vec<&str> = overview.columns.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(companies, vec!["Aviva", "Monzo"]);
        assert_eq!(overview.categories.len(), 2);
        assert_eq!(overview.columns[0].band, Some(Score::Moderate));
    }

    #[test]
    fn test_overview_truncates_insight_lists() {
        let analysis = AuditAnalysis::run(&sample_records());
        let overview = build(&analysis, &ThemeFilter::All, SortMode::Natural, 0);

        assert!(overview.insights.uncontested.is_empty());
        assert!(overview.insights.battlegrounds.is_empty());
        assert_eq!(overview.insights.theme_averages.len(), 2);
        assert_eq!(analysis.insights.uncontested.len(), 1);
    }

    #[test]
    fn test_overview_of_empty_analysis() {
        let analysis = AuditAnalysis::run(&[]);
        let overview = build(&analysis, &ThemeFilter::All, SortMode::Natural, 8);

        assert!(overview.is_empty());
        assert!(overview.rows.is_empty());
        assert!(overview.columns.is_empty());
        assert!(overview.categories.is_empty());
        assert_eq!(overview.subtitle(), "0 companies × 0 tactics");
    }
}
