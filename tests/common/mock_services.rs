//! Mock services for testing
//!
//! A recording git client that fakes clones by creating the target directory,
//! and a reporter that keeps every line it was asked to print.

use async_trait::async_trait;
use bild_installer::application::use_cases::install_applications::Reporter;
use bild_installer::domain::value_objects::install_outcome::FailureReason;
use bild_installer::infrastructure::scm::{CommandOutput, ScmError, ScmOperations};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Calls received by [`RecordingScm`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmCall {
    Clone {
        url: String,
        working_dir: PathBuf,
        dest: String,
    },
    Checkout {
        repo_path: PathBuf,
        branch: String,
    },
}

/// Fake git client
pub struct RecordingScm {
    /// Call history for verification
    calls: Arc<Mutex<Vec<ScmCall>>>,
    /// Clone URLs that exit with status 128
    failing_urls: HashSet<String>,
    /// Whether checkouts exit with status 1
    failing_checkout: bool,
}

impl RecordingScm {
    /// Create a new recording client where every command succeeds
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failing_urls: HashSet::new(),
            failing_checkout: false,
        }
    }

    /// Make clones of `url` fail without creating anything
    pub fn with_failing_url(mut self, url: &str) -> Self {
        self.failing_urls.insert(url.to_string());
        self
    }

    /// Make every checkout fail
    pub fn with_failing_checkout(mut self) -> Self {
        self.failing_checkout = true;
        self
    }

    /// Shared handle to the call history, usable after the client is moved
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<ScmCall>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: ScmCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ScmOperations for RecordingScm {
    async fn clone_repository(
        &self,
        url: &str,
        working_dir: &Path,
        dest: &str,
    ) -> Result<CommandOutput, ScmError> {
        self.record(ScmCall::Clone {
            url: url.to_string(),
            working_dir: working_dir.to_path_buf(),
            dest: dest.to_string(),
        });

        if self.failing_urls.contains(url) {
            return Ok(CommandOutput::failure(128, "fatal: repository not found"));
        }

        std::fs::create_dir_all(working_dir.join(dest).join(".git"))
            .map_err(|e| ScmError::spawn_failed("git clone", e))?;
        Ok(CommandOutput::success())
    }

    async fn checkout_branch(
        &self,
        repo_path: &Path,
        branch: &str,
    ) -> Result<CommandOutput, ScmError> {
        self.record(ScmCall::Checkout {
            repo_path: repo_path.to_path_buf(),
            branch: branch.to_string(),
        });

        if self.failing_checkout {
            return Ok(CommandOutput::failure(1, "error: pathspec did not match"));
        }
        Ok(CommandOutput::success())
    }
}

/// Reporter keeping every event in order
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub installing: Vec<String>,
    pub notices: Vec<(String, FailureReason)>,
    pub reports: Vec<(String, bool)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn installing(&mut self, name: &str) {
        self.installing.push(name.to_string());
    }

    fn notice(&mut self, name: &str, reason: &FailureReason) {
        self.notices.push((name.to_string(), reason.clone()));
    }

    fn report(&mut self, name: &str, installed: bool) {
        self.reports.push((name.to_string(), installed));
    }
}
