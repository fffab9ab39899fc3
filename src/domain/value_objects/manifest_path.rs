use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// ManifestPath関連のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestPathError {
    #[error("Manifest path cannot be empty")]
    Empty,

    #[error("Manifest file must have a .json extension: {0}")]
    NotJson(String),
}

/// マニフェストファイルパスの値オブジェクト
///
/// 拡張子が `.json` であることを保証する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestPath {
    path: PathBuf,
}

impl ManifestPath {
    /// 拡張子の期待値
    pub const EXTENSION: &'static str = "json";

    /// 新しいManifestPathインスタンスを作成
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ManifestPathError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ManifestPathError::Empty);
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext == Self::EXTENSION => Ok(Self {
                path: path.to_path_buf(),
            }),
            _ => Err(ManifestPathError::NotJson(path.display().to_string())),
        }
    }

    /// ファイルパス
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// マニフェストのあるディレクトリ（インストール先のルート）
    ///
    /// `apps.json` のように親がない場合は `.` を返す。
    pub fn working_root(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl fmt::Display for ManifestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for ManifestPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
