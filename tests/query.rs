mod common;

#[cfg(test)]
mod tests {
    use super::common::{day, window};
    use jiralog::libs::query::{WorklogQuery, GRACE_DAYS, PAGE_SIZE, SEARCH_FIELDS};

    #[test]
    fn test_query_widens_upper_bound_by_grace_days() {
        let query = WorklogQuery::new("DEMO", &window("2024-01-01", "2024-01-31"));

        assert_eq!(GRACE_DAYS, 5);
        assert_eq!(query.created_before, day("2024-02-05"));
        assert_eq!(query.updated_after, day("2024-01-01"));
    }

    #[test]
    fn test_query_jql() {
        let query = WorklogQuery::new("DEMO", &window("2024-01-01", "2024-01-31"));

        assert_eq!(
            query.jql(),
            r#"project = "DEMO" and created <= "2024-02-05" and updated >= "2024-01-01" and timespent > 0"#
        );
    }

    #[test]
    fn test_query_escapes_project_quotes() {
        let query = WorklogQuery::new("A\"B", &window("2024-03-01", "2024-03-01"));

        assert!(query.jql().starts_with(r#"project = "A\"B" and"#));
    }

    #[test]
    fn test_grace_crosses_month_and_year() {
        let query = WorklogQuery::new("DEMO", &window("2023-12-01", "2023-12-29"));

        assert_eq!(query.created_before, day("2024-01-03"));
    }

    #[test]
    fn test_search_constants() {
        assert_eq!(PAGE_SIZE, 1000);
        assert_eq!(SEARCH_FIELDS, ["summary", "worklog"]);
    }
}
