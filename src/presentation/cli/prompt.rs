use crate::application::services::prompter::{PromptError, Prompter};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Password};

/// Terminal prompts backed by `dialoguer`
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail fast instead of waiting on a terminal nobody is watching
    fn ensure_attended(what: &str) -> Result<(), PromptError> {
        if console::user_attended() {
            Ok(())
        } else {
            Err(PromptError::NotAttended(what.to_string()))
        }
    }
}

/// The typed user is substituted verbatim; only blank input is refused
fn accept_user(user: String) -> Result<String, PromptError> {
    if user.trim().is_empty() {
        return Err(PromptError::EmptyValue("user".to_string()));
    }
    Ok(user)
}

fn terminal_error(error: dialoguer::Error) -> PromptError {
    PromptError::Terminal(error.to_string())
}

impl Prompter for DialoguerPrompter {
    fn show_message(&self, message: &str) {
        println!("{message}");
    }

    fn ask_user(&self) -> Result<String, PromptError> {
        Self::ensure_attended("the git user")?;

        let user: String = Input::with_theme(&self.theme)
            .with_prompt("Git user")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("user must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(terminal_error)?;

        accept_user(user)
    }

    fn ask_password(&self) -> Result<String, PromptError> {
        Self::ensure_attended("the git password")?;

        let password = Password::with_theme(&self.theme)
            .with_prompt("Git password")
            .interact()
            .map_err(terminal_error)?;

        if password.is_empty() {
            return Err(PromptError::EmptyValue("password".to_string()));
        }
        Ok(password)
    }

    fn ask_selection(&self, message: &str, choices: &[String]) -> Result<Vec<usize>, PromptError> {
        Self::ensure_attended("the applications to install")?;

        MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .interact()
            .map_err(terminal_error)
    }
}
