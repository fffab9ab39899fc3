pub mod commands;
pub mod prompt;
pub mod reporter;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::use_cases::install_applications::InstallSummary;
use crate::common::error::InstallerError;
use commands::InstallCommand;
use prompt::DialoguerPrompter;

/// Environment variable holding the git password
pub const PASSWORD_ENV: &str = "BILD_INSTALLER_PASSWORD";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

/// bild-installer - clone the applications listed in a JSON manifest
#[derive(Parser, Debug)]
#[command(name = "bild-installer")]
#[command(about = "Clone the applications listed in a JSON manifest")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Path to the manifest (.json); any other number of paths does nothing
    #[arg(value_name = "MANIFEST", num_args = 0..)]
    pub manifests: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Install into this directory instead of the manifest's directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Install these applications without asking (repeatable, order is kept)
    #[arg(long = "select", value_name = "NAME")]
    pub select: Vec<String>,

    /// Treat a failing `git clone` as a failed installation
    #[arg(long)]
    pub verify_clone: bool,

    /// Exit with status 1 when any application was not installed
    #[arg(long)]
    pub fail_on_error: bool,

    /// Git executable to run
    #[arg(long, value_name = "PATH", env = "BILD_INSTALLER_GIT", default_value = "git")]
    pub git: String,

    /// Git user substituted into the manifest
    #[arg(long, env = "BILD_INSTALLER_USER")]
    pub user: Option<String>,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        init_tracing(self.cli.verbose);

        // Set up colored output
        colored::control::set_override(!self.cli.no_color);

        let [manifest] = self.cli.manifests.as_slice() else {
            debug!(
                count = self.cli.manifests.len(),
                "expected exactly one manifest, nothing to do"
            );
            return Ok(());
        };
        let manifest = manifest.clone();

        match self.handle_install_command(manifest).await {
            Ok(_) => Ok(()),
            Err(e) => {
                match e.downcast_ref::<InstallerError>() {
                    // Plain line on stdout, like the reporter's output
                    Some(InstallerError::InvocationError { message }) => println!("{message}"),
                    _ => eprintln!("{} {}", "Error:".red().bold(), e),
                }
                exit(1);
            }
        }
    }

    async fn handle_install_command(&self, manifest: String) -> anyhow::Result<()> {
        let command = InstallCommand {
            manifest,
            directory: self.cli.directory.clone(),
            select: self.cli.select.clone(),
            user: self.cli.user.clone(),
            password: std::env::var(PASSWORD_ENV).ok(),
            git: self.cli.git.clone(),
            verify_clone: self.cli.verify_clone,
        };

        let summary = command.execute(&DialoguerPrompter::new()).await?;

        if self.cli.verbose {
            print_summary(&summary);
        }

        if self.cli.fail_on_error && !summary.is_success() {
            anyhow::bail!(
                "{} of {} applications were not installed",
                summary.failed_count(),
                summary.attempted_count()
            );
        }

        Ok(())
    }
}

fn print_summary(summary: &InstallSummary) {
    println!(
        "{} {} installed, {} not installed",
        "::".blue().bold(),
        summary.installed_count(),
        summary.failed_count()
    );
    for (name, outcome) in &summary.outcomes {
        if let Some(reason) = outcome.failure_reason() {
            println!("  {} {}: {}", "✗".red(), name, reason);
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `--verbose`
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,bild_installer=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
