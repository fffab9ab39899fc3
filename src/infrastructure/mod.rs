/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (git clone, fetch, checkout)
/// - File system operations (manifest files)
pub mod filesystem;
pub mod scm;

// Re-export commonly used types
pub use filesystem::manifest_store::ManifestStore;
pub use scm::{CommandOutput, GitScm, ScmError, ScmOperations};
