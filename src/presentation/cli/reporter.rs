use crate::application::use_cases::install_applications::Reporter;
use crate::domain::value_objects::install_outcome::FailureReason;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prints one colored line per application to stdout
///
/// A spinner runs on stderr while an application is being installed. It is
/// hidden automatically when stderr is not a terminal.
#[derive(Default)]
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome line for an application
    pub fn outcome_line(name: &str, installed: bool) -> String {
        if installed {
            format!("Application {name} successfully installed!")
                .green()
                .to_string()
        } else {
            format!("Application {name} is not installed!").red().to_string()
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

impl Reporter for ConsoleReporter {
    fn installing(&mut self, name: &str) {
        self.clear_spinner();
        println!("Installing application: {}", name.bold());
        self.spinner = Some(spinner(format!("installing {name}...")));
    }

    fn notice(&mut self, _name: &str, reason: &FailureReason) {
        if let FailureReason::AlreadyExists(_) = reason {
            self.clear_spinner();
            println!("{}", "Application exists!!!".blue());
        }
    }

    fn report(&mut self, name: &str, installed: bool) {
        self.clear_spinner();
        println!("{}", Self::outcome_line(name, installed));
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}
