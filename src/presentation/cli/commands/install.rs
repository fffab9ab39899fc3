use std::path::PathBuf;
use tracing::{debug, warn};

use crate::application::services::{manifest_service::ManifestService, prompter::Prompter};
use crate::application::use_cases::install_applications::{
    InstallApplicationsConfig, InstallApplicationsUseCase, InstallSummary,
};
use crate::application::use_cases::select_applications::SelectApplicationsUseCase;
use crate::common::result::InstallerResult;
use crate::domain::entities::credentials::Credentials;
use crate::domain::value_objects::manifest_path::ManifestPath;
use crate::infrastructure::scm::GitScm;
use crate::presentation::cli::reporter::ConsoleReporter;

/// Shown once before asking for credentials
pub const CREDENTIALS_MESSAGE: &str =
    "Insert bitbucket user name and password to continue with installation!";

/// Handler for installing applications from a manifest
pub struct InstallCommand {
    pub manifest: String,
    pub directory: Option<PathBuf>,
    pub select: Vec<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub git: String,
    pub verify_clone: bool,
}

impl InstallCommand {
    pub fn new(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            directory: None,
            select: Vec::new(),
            user: None,
            password: None,
            git: "git".to_string(),
            verify_clone: false,
        }
    }

    /// Validate the manifest path, collect credentials, load, select and install
    pub async fn execute<P: Prompter>(&self, prompter: &P) -> InstallerResult<InstallSummary> {
        // Nothing is touched before the path is known to be a .json file
        let manifest_path = ManifestPath::new(&self.manifest)?;

        let credentials = self.collect_credentials(prompter)?;
        let manifest = ManifestService::new()
            .load(manifest_path.as_path(), &credentials)
            .await?;

        let selection = SelectApplicationsUseCase::new(prompter).execute(&manifest, &self.select)?;
        if selection.is_empty() {
            debug!("no applications selected");
            return Ok(InstallSummary::new());
        }

        let scm = GitScm::with_executable(&self.git);
        if let Err(e) = scm.check_availability().await {
            warn!(error = %e, "git is not available, installations will fail");
        }

        let working_root = self
            .directory
            .clone()
            .unwrap_or_else(|| manifest_path.working_root());
        let config =
            InstallApplicationsConfig::new(working_root).with_verify_clone(self.verify_clone);

        let mut reporter = ConsoleReporter::new();
        let summary = InstallApplicationsUseCase::new(config, scm)
            .execute(&manifest, &selection, &mut reporter)
            .await;

        Ok(summary)
    }

    fn collect_credentials<P: Prompter>(&self, prompter: &P) -> InstallerResult<Credentials> {
        if non_empty(&self.user).is_none() || non_empty(&self.password).is_none() {
            prompter.show_message(CREDENTIALS_MESSAGE);
        }

        let user = match non_empty(&self.user) {
            Some(user) => user,
            None => prompter.ask_user()?,
        };
        let password = match non_empty(&self.password) {
            Some(password) => password,
            None => prompter.ask_password()?,
        };
        Credentials::new(user, password)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
