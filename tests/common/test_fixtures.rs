//! Test fixtures for creating test data
//!
//! Manifest documents and the files that hold them.

use std::path::{Path, PathBuf};

/// Manifest documents used across the integration tests
pub struct ManifestFixture;

impl ManifestFixture {
    /// Two applications, the second one on a branch
    pub fn simple() -> &'static str {
        r#"[
  {"name": "A", "downloadPath": "a", "git": {"https": "u1"}},
  {"name": "B", "downloadPath": "b", "git": {"https": "u2", "branch": "dev"}}
]"#
    }

    /// Applications with credentials, nested parent paths and a broken entry
    pub fn templated() -> &'static str {
        r#"[
  {
    "name": "frontend",
    "parentPath": "web",
    "downloadPath": "frontend",
    "git": {
      "https": "https://<%= user %>:<%= password %>@bitbucket.org/team/frontend.git",
      "branch": "develop"
    }
  },
  {
    "name": "backend",
    "parentPath": "services/api",
    "downloadPath": "backend",
    "git": {"https": "https://<%= user %>:<%= password %>@bitbucket.org/team/backend.git"}
  },
  {
    "name": "docs",
    "downloadPath": "docs"
  }
]"#
    }

    /// Names repeated within one manifest
    pub fn duplicated() -> &'static str {
        r#"[
  {"name": "A", "downloadPath": "a", "git": {"https": "u1"}},
  {"name": "A", "downloadPath": "a2", "git": {"https": "u2"}}
]"#
    }
}

/// Write `content` to `dir/filename` and return its path
pub fn write_manifest(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    std::fs::write(&path, content).unwrap();
    path
}
