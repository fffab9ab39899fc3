pub mod install_applications;
pub mod select_applications;

pub use install_applications::{
    InstallApplicationsConfig, InstallApplicationsError, InstallApplicationsUseCase,
    InstallSummary, Reporter,
};
pub use select_applications::{SelectApplicationsUseCase, SelectionError};
