use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    /// The command line pointed at something that is not a JSON manifest.
    #[error("{message}")]
    InvocationError { message: String },

    #[error("Manifest error: {message}")]
    ManifestError {
        message: String,
        file_path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Selection error: {message}")]
    SelectionError { message: String },

    #[error("Prompt failed: {message}")]
    PromptError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },
}

impl InstallerError {
    /// Message printed when the manifest argument is not a `.json` file.
    pub const INCORRECT_FILE: &'static str = "File is not correct!!!";

    pub fn invocation_error(message: impl Into<String>) -> Self {
        Self::InvocationError {
            message: message.into(),
        }
    }

    pub fn incorrect_file() -> Self {
        Self::invocation_error(Self::INCORRECT_FILE)
    }

    pub fn manifest_error_with_source(
        message: impl Into<String>,
        file_path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ManifestError {
            message: message.into(),
            file_path,
            source: Some(Box::new(source)),
        }
    }

    pub fn selection_error(message: impl Into<String>) -> Self {
        Self::SelectionError {
            message: message.into(),
        }
    }

    pub fn prompt_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PromptError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}

impl From<crate::application::services::prompter::PromptError> for InstallerError {
    fn from(error: crate::application::services::prompter::PromptError) -> Self {
        Self::prompt_error_with_source(error.to_string(), error)
    }
}

impl From<crate::domain::value_objects::manifest_path::ManifestPathError> for InstallerError {
    fn from(_: crate::domain::value_objects::manifest_path::ManifestPathError) -> Self {
        Self::incorrect_file()
    }
}

impl From<crate::application::services::manifest_service::ManifestServiceError>
    for InstallerError
{
    fn from(error: crate::application::services::manifest_service::ManifestServiceError) -> Self {
        let file_path = error.file_path().map(|p| p.to_path_buf());
        Self::manifest_error_with_source(error.to_string(), file_path, error)
    }
}

impl From<crate::application::use_cases::select_applications::SelectionError>
    for InstallerError
{
    fn from(error: crate::application::use_cases::select_applications::SelectionError) -> Self {
        use crate::application::use_cases::select_applications::SelectionError;
        match error {
            SelectionError::Prompt(e) => e.into(),
            other => Self::selection_error(other.to_string()),
        }
    }
}
