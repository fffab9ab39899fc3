//! # bild-installer - JSON manifest application installer
//!
//! `bild-installer` reads a JSON manifest describing applications hosted in git
//! repositories, lets the operator pick which ones to install, and clones each
//! selected application into a directory next to the manifest.
//!
//! ## Features
//!
//! - **Templated manifests**: `<%= user %>` and `<%= password %>` are filled in
//!   from the operator's credentials before the manifest is parsed
//! - **Interactive selection**: multi-select prompt, or `--select` for scripts
//! - **Sequential installation**: one application at a time, each reported once
//! - **Safe by default**: existing directories are never overwritten
//!
//! ## Quick Start
//!
//! 1. Write a manifest (`apps.json`):
//!
//! ```json
//! [
//!   {
//!     "name": "frontend",
//!     "parentPath": "web",
//!     "downloadPath": "frontend",
//!     "git": {
//!       "https": "https://<%= user %>:<%= password %>@bitbucket.org/team/frontend.git",
//!       "branch": "develop"
//!     }
//!   }
//! ]
//! ```
//!
//! 2. Run the installer:
//!
//! ```bash
//! bild-installer apps.json
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: Applications, manifests, credentials and install outcomes
//! - [`application`]: Manifest loading, selection and the installer loop
//! - [`infrastructure`]: Manifest files and the `git` subprocess
//! - [`presentation`]: CLI, terminal prompts and console reporting
//! - [`common`]: Error types, result helpers and manifest templating
//!
//! ## Examples
//!
//! ```rust,no_run
//! use bild_installer::application::services::manifest_service::ManifestService;
//! use bild_installer::application::use_cases::install_applications::{
//!     InstallApplicationsConfig, InstallApplicationsUseCase, Reporter,
//! };
//! use bild_installer::domain::entities::credentials::Credentials;
//! use bild_installer::domain::value_objects::selection::Selection;
//! use bild_installer::infrastructure::scm::GitScm;
//!
//! struct PrintReporter;
//!
//! impl Reporter for PrintReporter {
//!     fn report(&mut self, name: &str, installed: bool) {
//!         println!("{name}: {installed}");
//!     }
//! }
//!
//! # async fn example() -> bild_installer::Result<()> {
//! let credentials = Credentials::new("alice", "secret")?;
//! let manifest = ManifestService::new().load("apps.json", &credentials).await?;
//!
//! let config = InstallApplicationsConfig::new(".").with_verify_clone(true);
//! let use_case = InstallApplicationsUseCase::new(config, GitScm::new());
//! let summary = use_case
//!     .execute(&manifest, &Selection::new(["frontend"]), &mut PrintReporter)
//!     .await;
//!
//! println!("{} installed", summary.installed_count());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::InstallerError;
pub use crate::common::result::InstallerResult as Result;
