/// Every user-facing message of the application.
///
/// Parameters carry the dynamic parts of the text; the wording itself lives in
/// the `Display` implementation in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    ConfigModuleJira,
    JiraNotConfigured,
    InvalidBaseUrl(String), // input

    // === CREDENTIAL MESSAGES ===
    CredentialFromEnv,
    CredentialMissing,

    // === FETCH MESSAGES ===
    FetchingWorklogs(String, String, String), // project, from, to
    FetchingSprints(String),                  // project
    FetchingProjects,
    TrackerRequestFailed(String), // details
    TrackerNotFound(String),      // what

    // === REPORT MESSAGES ===
    ReportHeader(String, String, String), // project, from, to
    ReportSprint(String),                 // sprint name
    SprintMatchedWindow(String),          // sprint name
    NoWorklogsFound,
    TeamTotalHeader,
    WorklogsHeader,
    InvalidDate(String), // input
    InvalidDateRange(String, String), // from, to

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportFailed(String),    // details

    // === SPRINT AND PROJECT MESSAGES ===
    SprintsHeader(String), // project
    NoSprintsFound(String), // project
    ProjectsHeader,
    NoProjectsFound,

    // === PROMPTS ===
    PromptSelectModules,
    PromptJiraUrl,
    PromptJiraLogin,
    PromptJiraPassword,
}
