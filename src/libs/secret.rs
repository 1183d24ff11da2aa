//! Runtime source of the tracker credential.
//!
//! The password is read from an environment variable (a `.env` file works
//! too, it is loaded at startup) or asked for interactively. It lives only in
//! memory for the duration of one command and is never written to disk.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};
use std::env;

pub const PASSWORD_ENV: &str = "JIRALOG_PASSWORD";

pub struct Secret {
    env_var: String,
    prompt: String,
}

impl Secret {
    pub fn new(env_var: &str, prompt: &str) -> Self {
        Self {
            env_var: env_var.to_string(),
            prompt: prompt.to_string(),
        }
    }

    /// The Jira password: `JIRALOG_PASSWORD` or an interactive prompt.
    pub fn jira() -> Self {
        Self::new(PASSWORD_ENV, &Message::PromptJiraPassword.to_string())
    }

    /// Value of the environment variable, if set and not blank.
    pub fn from_env(&self) -> Option<String> {
        env::var(&self.env_var).ok().filter(|value| !value.trim().is_empty())
    }

    pub fn get_or_prompt(&self) -> Result<String> {
        if let Some(value) = self.from_env() {
            msg_debug!(Message::CredentialFromEnv);
            return Ok(value);
        }
        self.prompt()
    }

    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        if password.is_empty() {
            msg_bail_anyhow!(Message::CredentialMissing);
        }
        Ok(password)
    }
}
