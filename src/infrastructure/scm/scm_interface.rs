use async_trait::async_trait;
use std::path::Path;

/// Result of a finished SCM command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Captured standard error, trimmed
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a command that exited with status 0
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            stderr: String::new(),
        }
    }

    /// Output of a command that exited with the given status
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with status 0
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Version control operations used by the installer
///
/// Implementations report the command's exit status instead of failing on
/// it; callers decide whether a non-zero status matters. An `Err` means the
/// command could not be run at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Clone `url` into the directory `dest`, relative to `working_dir`
    async fn clone_repository(
        &self,
        url: &str,
        working_dir: &Path,
        dest: &str,
    ) -> Result<CommandOutput, ScmError>;

    /// Fetch from the default remote and check out `branch` in `repo_path`
    async fn checkout_branch(
        &self,
        repo_path: &Path,
        branch: &str,
    ) -> Result<CommandOutput, ScmError>;
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Working directory does not exist: {path}")]
    WorkingDirectoryNotFound { path: String },

    #[error("Failed to run {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScmError {
    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a spawn failed error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            source,
        }
    }
}
