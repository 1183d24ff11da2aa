use jiralog::commands::Cli;
use jiralog::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jiralog=debug"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
    }

    Cli::menu().await
}
