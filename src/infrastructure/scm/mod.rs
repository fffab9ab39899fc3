/// Version control operations infrastructure
///
/// The installer only needs git, driven as a subprocess.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{CommandOutput, ScmError, ScmOperations};
