use super::scm_interface::{CommandOutput, ScmError, ScmOperations};
use crate::domain::value_objects::clone_url::CloneUrl;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Git implementation of SCM operations, driving the `git` executable
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Executable this instance runs
    pub fn executable(&self) -> &str {
        &self.git_executable
    }

    /// Check if git executable is available
    pub async fn check_availability(&self) -> Result<(), ScmError> {
        let output = self.execute_git_command(&["--version"], None, "git --version").await?;

        if !output.is_success() {
            return Err(ScmError::executable_not_found(&self.git_executable));
        }

        Ok(())
    }

    /// Execute a git command in the given directory
    ///
    /// `command_line` is what gets logged in place of the real arguments, which
    /// may carry credentials.
    async fn execute_git_command(
        &self,
        args: &[&str],
        working_dir: Option<&Path>,
        command_line: &str,
    ) -> Result<CommandOutput, ScmError> {
        let mut cmd = Command::new(&self.git_executable);
        cmd.args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = working_dir {
            if !dir.is_dir() {
                return Err(ScmError::WorkingDirectoryNotFound {
                    path: dir.display().to_string(),
                });
            }
            cmd.current_dir(dir);
        }

        debug!(command = %command_line, cwd = ?working_dir, "running git");

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScmError::executable_not_found(&self.git_executable)
            } else {
                ScmError::spawn_failed(command_line, e)
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(
            command = %command_line,
            exit_code = ?output.status.code(),
            stderr = %stderr,
            "git finished"
        );

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stderr,
        })
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn clone_repository(
        &self,
        url: &str,
        working_dir: &Path,
        dest: &str,
    ) -> Result<CommandOutput, ScmError> {
        let command_line = format!(
            "{} clone -- {} {}",
            self.git_executable,
            CloneUrl::new(url),
            dest
        );
        self.execute_git_command(&["clone", "--", url, dest], Some(working_dir), &command_line)
            .await
    }

    async fn checkout_branch(
        &self,
        repo_path: &Path,
        branch: &str,
    ) -> Result<CommandOutput, ScmError> {
        let fetch = self
            .execute_git_command(
                &["fetch"],
                Some(repo_path),
                &format!("{} fetch", self.git_executable),
            )
            .await?;

        if !fetch.is_success() {
            return Ok(fetch);
        }

        self.execute_git_command(
            &["checkout", branch],
            Some(repo_path),
            &format!("{} checkout {}", self.git_executable, branch),
        )
        .await
    }
}
