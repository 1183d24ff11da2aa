#[cfg(test)]
mod tests {
    use jiralog::api::jira::{normalize_base_url, JiraConfig};
    use jiralog::libs::config::{Config, CONFIG_FILE_NAME};
    use jiralog::libs::data_storage::DataStorage;
    use jiralog::libs::secret::{Secret, PASSWORD_ENV};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide; tests that point it at their own directory take turns.
    static HOME_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn jira() -> JiraConfig {
        JiraConfig {
            base_url: "https://jira.example.com".to_string(),
            login: "alice".to_string(),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_save_and_read(_ctx: &mut ConfigTestContext) {
        let config = Config { jira: Some(jira()) };
        config.save().unwrap();

        let loaded = Config::read().unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.jira().unwrap().login, "alice");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_stored_config_has_no_credential(_ctx: &mut ConfigTestContext) {
        Config { jira: Some(jira()) }.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let stored: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(stored["jira"]["base_url"], "https://jira.example.com");
        let keys: Vec<&String> = stored["jira"].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(!keys.iter().any(|key| key.contains("password") || key.contains("credential")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_is_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config, Config::default());
        assert!(config.jira().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_jira_is_omitted(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap().trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test]
    fn test_tracker_config_from_jira_settings() {
        let tracker_config = jira().tracker_config("s3cret");

        assert_eq!(tracker_config.base_url(), "https://jira.example.com");
        assert_eq!(tracker_config.user(), "alice");
        assert_eq!(tracker_config.credential(), "s3cret");
        assert!(!format!("{:?}", tracker_config).contains("s3cret"));
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(normalize_base_url("https://jira.example.com/browse/DEMO-1").unwrap(), "https://jira.example.com");
        assert_eq!(normalize_base_url(" http://jira.local:8080/ ").unwrap(), "http://jira.local:8080");
        assert!(normalize_base_url("not a url").is_err());
    }

    #[test]
    fn test_secret_from_env() {
        let secret = Secret::new("JIRALOG_TEST_SECRET", "unused");

        std::env::remove_var("JIRALOG_TEST_SECRET");
        assert_eq!(secret.from_env(), None);

        std::env::set_var("JIRALOG_TEST_SECRET", "   ");
        assert_eq!(secret.from_env(), None);

        std::env::set_var("JIRALOG_TEST_SECRET", "hunter2");
        assert_eq!(secret.from_env(), Some("hunter2".to_string()));
        assert_eq!(secret.get_or_prompt().unwrap(), "hunter2");

        assert_eq!(PASSWORD_ENV, "JIRALOG_PASSWORD");
    }
}
