use std::fmt;
use std::path::PathBuf;

/// インストールが行われなかった理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// 作業ディレクトリが設定されていない
    MissingWorkingRoot,

    /// 選択された名前がマニフェストに存在しない
    UnknownApplication,

    /// downloadPath が未定義または空
    MissingDownloadPath,

    /// クローン先がすでに存在する（インストール済みとみなす）
    AlreadyExists(PathBuf),

    /// git.https が未定義
    MissingGitUrl,

    /// クローンコマンドが失敗した（終了コード検証時のみ）
    CloneFailed { exit_code: Option<i32> },

    /// 予期しない実行時エラー
    Fault(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWorkingRoot => write!(f, "working directory is not configured"),
            Self::UnknownApplication => write!(f, "application is not defined in the manifest"),
            Self::MissingDownloadPath => write!(f, "download path is not defined"),
            Self::AlreadyExists(path) => write!(f, "{} already exists", path.display()),
            Self::MissingGitUrl => write!(f, "git.https is not defined"),
            Self::CloneFailed {
                exit_code: Some(code),
            } => write!(f, "clone exited with status {}", code),
            Self::CloneFailed { exit_code: None } => write!(f, "clone was terminated by a signal"),
            Self::Fault(message) => write!(f, "{}", message),
        }
    }
}

/// アプリケーション1件のインストール結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// インストール成功
    Installed,
    /// インストールされなかった
    NotInstalled(FailureReason),
}

impl InstallOutcome {
    /// インストールされたか
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }

    /// 失敗理由
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            Self::Installed => None,
            Self::NotInstalled(reason) => Some(reason),
        }
    }
}

impl From<FailureReason> for InstallOutcome {
    fn from(reason: FailureReason) -> Self {
        Self::NotInstalled(reason)
    }
}
