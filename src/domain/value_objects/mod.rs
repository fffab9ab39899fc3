pub mod clone_url;
pub mod install_outcome;
pub mod manifest_path;
pub mod selection;

pub use clone_url::CloneUrl;
pub use install_outcome::{FailureReason, InstallOutcome};
pub use manifest_path::{ManifestPath, ManifestPathError};
pub use selection::Selection;
