mod common;

#[cfg(test)]
mod tests {
    use super::common::{issue, sprint, tracker_config, truncated_issue, window, worklog, FakeTracker};
    use jiralog::api::TrackerConfig;
    use jiralog::libs::error::WorklogError;
    use jiralog::libs::export::ExportFormat;
    use jiralog::libs::query::WorklogQuery;
    use jiralog::libs::report::WorklogReport;
    use jiralog::libs::sprint::find_matching;
    use serde_json::json;
    use test_context::{test_context, AsyncTestContext};

    struct ReportTestContext {
        tracker: FakeTracker,
        config: TrackerConfig,
    }

    impl AsyncTestContext for ReportTestContext {
        async fn setup() -> Self {
            let mut tracker = FakeTracker::with_issues(vec![
                issue("DEMO-1", "Issue A", vec![worklog("10", "alice", "2024-01-15T10:00:00.000+0000", 3600)]),
                issue("DEMO-2", "Issue B", vec![worklog("11", "alice", "2023-12-20T09:00:00.000+0000", 1800)]),
                truncated_issue("DEMO-3", "Issue C", vec![worklog("20", "bob", "2024-01-03T08:00:00.000+0000", 600)], 2),
            ]);
            tracker.full_worklogs.insert(
                "DEMO-3".to_string(),
                vec![
                    worklog("20", "bob", "2024-01-03T08:00:00.000+0000", 600),
                    worklog("21", "bob", "2024-01-04T08:00:00.000+0000", 1200),
                ],
            );
            tracker.boards = vec![json!({ "id": 1, "name": "DEMO board", "type": "scrum" })];
            tracker.sprints.insert(
                1,
                vec![
                    sprint(41, "January", Some("2024-01-01T09:00:00.000+0000"), Some("2024-01-31T18:00:00.000+0000")),
                    sprint(42, "February", Some("2024-02-01T09:00:00.000+0000"), Some("2024-02-29T18:00:00.000+0000")),
                ],
            );

            ReportTestContext {
                tracker,
                config: tracker_config(),
            }
        }
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_aggregate_report(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);
        let window = window("2024-01-01", "2024-01-31");

        let result = report.aggregate("DEMO", &window).await.unwrap();

        assert_eq!(result.ordered_entries().len(), 3);
        assert_eq!(result.total_seconds_for("alice"), Some(3600));
        assert_eq!(result.total_seconds_for("bob"), Some(1800));
        assert_eq!(result.total_seconds(), 5400);
        assert_eq!(ctx.tracker.worklog_calls_for("DEMO-3"), 1);
        assert_eq!(ctx.tracker.search_calls.borrow()[0].0, WorklogQuery::new("DEMO", &window).jql());
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_export_document(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        let document = report.export("DEMO", &window("2024-01-01", "2024-01-31"), ExportFormat::Csv).await.unwrap();
        let text = String::from_utf8(document.bytes).unwrap();

        assert_eq!(document.filename, "01-01-2024-31-01-2024.csv");
        assert!(text.starts_with("Project,DEMO,"));
        assert!(text.contains("Sprint,-,"));
        assert!(text.contains("https://jira.example.com/browse/DEMO-1"));
        assert!(!text.contains("DEMO-2"));
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_export_for_sprint(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        let (sprint, window) = report.sprint_window(41).await.unwrap();
        let document = report
            .export_with_sprint("DEMO", &window, ExportFormat::Xls, Some(&sprint))
            .await
            .unwrap();
        let xml = String::from_utf8(document.bytes).unwrap();

        assert_eq!(window, super::common::window("2024-01-01", "2024-01-31"));
        assert!(xml.contains(">January</Data>"));
        assert_eq!(document.filename, "01-01-2024-31-01-2024.xls");
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_recent_sprints_match_window(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        let sprints = report.recent_sprints("DEMO").await.unwrap();

        assert_eq!(sprints[0].name, "February");
        let matched = find_matching(&sprints, &window("2024-01-01", "2024-01-31"));
        assert_eq!(matched.map(|sprint| sprint.id), Some(41));
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_matching_sprint_for_window(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        let january = report.matching_sprint("DEMO", &window("2024-01-01", "2024-01-31")).await;
        let partial = report.matching_sprint("DEMO", &window("2024-01-01", "2024-01-15")).await;

        assert_eq!(january.map(|sprint| sprint.name), Some("January".to_string()));
        assert!(partial.is_none());
        assert_eq!(ctx.tracker.board_calls.borrow().as_slice(), ["DEMO", "DEMO"]);
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_matching_sprint_without_boards(ctx: &mut ReportTestContext) {
        ctx.tracker.boards.clear();
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        assert!(report.matching_sprint("DEMO", &window("2024-01-01", "2024-01-31")).await.is_none());

        ctx.tracker.failure = Some("agile API disabled".to_string());
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);
        assert!(report.matching_sprint("DEMO", &window("2024-01-01", "2024-01-31")).await.is_none());
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_tracker_failure_surfaces(ctx: &mut ReportTestContext) {
        ctx.tracker.failure = Some("connection refused".to_string());
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        let result = report.export("DEMO", &window("2024-01-01", "2024-01-31"), ExportFormat::Pdf).await;

        assert!(matches!(result, Err(WorklogError::FetchFailed(_))));
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_unknown_sprint_is_not_found(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        assert!(matches!(report.sprint_window(7).await, Err(WorklogError::NotFound(_))));
    }

    #[test_context(ReportTestContext)]
    #[tokio::test]
    async fn test_every_format_exports(ctx: &mut ReportTestContext) {
        let report = WorklogReport::new(&ctx.tracker, &ctx.config);

        for format in ExportFormat::ALL {
            let document = report.export("DEMO", &window("2024-01-01", "2024-01-31"), format).await.unwrap();
            assert!(!document.bytes.is_empty());
            assert!(document.filename.ends_with(format.extension()));
            assert_eq!(document.content_type, format.content_type());
        }
    }
}
