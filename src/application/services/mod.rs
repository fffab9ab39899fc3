pub mod manifest_service;
pub mod prompter;

pub use manifest_service::{ManifestService, ManifestServiceError};
pub use prompter::{PromptError, Prompter};
