#[cfg(test)]
mod tests {
    use jiralog::api::{JiraBoard, JiraSprint, JiraUser, SearchPage, TrackerConfig};
    use jiralog::libs::worklog::Author;
    use serde_json::json;

    #[test]
    fn test_search_response_shape() {
        let page: SearchPage = serde_json::from_value(json!({
            "expand": "names,schema",
            "startAt": 0,
            "maxResults": 1000,
            "total": 1,
            "issues": [{
                "id": "10001",
                "key": "DEMO-1",
                "fields": {
                    "summary": "Login page",
                    "worklog": {
                        "startAt": 0,
                        "maxResults": 20,
                        "total": 1,
                        "worklogs": [{
                            "id": "30001",
                            "author": { "key": "JIRAUSER10100", "name": "alice", "displayName": "Alice Smith" },
                            "comment": "pairing",
                            "started": "2024-01-15T10:00:00.000+0000",
                            "timeSpent": "1h",
                            "timeSpentSeconds": 3600
                        }]
                    }
                }
            }]
        }))
        .unwrap();

        assert_eq!(page.total, 1);
        let worklog_page = page.issues[0].fields.worklog.as_ref().unwrap();
        assert!(!worklog_page.is_truncated());
        let worklog = &worklog_page.worklogs[0];
        assert_eq!(worklog.time_spent_seconds, 3600);
        assert_eq!(worklog.author.identity(), "JIRAUSER10100");
        assert_eq!(Author::from(&worklog.author), Author::new("JIRAUSER10100", "Alice Smith"));
    }

    #[test]
    fn test_truncated_embedded_page() {
        let page: SearchPage = serde_json::from_value(json!({
            "startAt": 0, "maxResults": 1000, "total": 1,
            "issues": [{ "key": "DEMO-1", "fields": { "summary": "Busy", "worklog": { "startAt": 0, "maxResults": 100, "total": 150, "worklogs": [] } } }]
        }))
        .unwrap();

        assert!(page.issues[0].fields.worklog.as_ref().unwrap().is_truncated());
    }

    #[test]
    fn test_user_identity_fallbacks() {
        let cloud: JiraUser = serde_json::from_value(json!({ "accountId": "5b10a2844c20165700ede21g", "displayName": "Bob" })).unwrap();
        let legacy: JiraUser = serde_json::from_value(json!({ "name": "carol", "displayName": "Carol" })).unwrap();

        assert_eq!(cloud.identity(), "5b10a2844c20165700ede21g");
        assert_eq!(legacy.identity(), "carol");
    }

    #[test]
    fn test_board_and_sprint_shapes() {
        let board: JiraBoard = serde_json::from_value(json!({ "id": 84, "self": "https://jira.example.com/rest/agile/1.0/board/84", "name": "DEMO", "type": "scrum" })).unwrap();
        let sprint: JiraSprint = serde_json::from_value(json!({
            "id": 37, "state": "closed", "name": "Sprint 37",
            "startDate": "2024-01-01T09:00:00.000Z", "endDate": "2024-01-14T18:00:00.000Z", "originBoardId": 84
        }))
        .unwrap();
        let future: JiraSprint = serde_json::from_value(json!({ "id": 38, "state": "future", "name": "Sprint 38" })).unwrap();

        assert_eq!(board.kind, "scrum");
        assert_eq!(sprint.start_date.as_deref(), Some("2024-01-01T09:00:00.000Z"));
        assert!(future.start_date.is_none() && future.end_date.is_none());
    }

    #[test]
    fn test_tracker_config_trims_trailing_slash_and_redacts() {
        let config = TrackerConfig::new("https://jira.example.com/", "alice", "hunter2");

        assert_eq!(config.base_url(), "https://jira.example.com");
        let debug = format!("{:?}", config);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
