use serde::{Deserialize, Serialize};

/// アプリケーションのGit参照
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GitSource {
    /// クローン元のURL（テンプレート展開済み、認証情報を含む場合がある）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,

    /// クローン後にチェックアウトするブランチ（オプション）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl GitSource {
    /// 新しいGitSourceインスタンスを作成
    pub fn new(https: impl Into<String>) -> Self {
        Self {
            https: Some(https.into()),
            branch: None,
        }
    }

    /// ブランチを設定
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// マニフェストのアプリケーション定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// アプリケーション名（マニフェスト内で一意）
    pub name: String,

    /// 作業ディレクトリからの親ディレクトリ（オプション）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_path: Option<String>,

    /// クローン先ディレクトリ（インストールには必須）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_path: Option<String>,

    /// Git参照（インストールには必須）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSource>,
}

impl Application {
    /// 新しいApplicationインスタンスを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_path: None,
            download_path: None,
            git: None,
        }
    }

    /// 親ディレクトリを設定
    pub fn with_parent_path(mut self, parent_path: impl Into<String>) -> Self {
        self.parent_path = Some(parent_path.into());
        self
    }

    /// クローン先ディレクトリを設定
    pub fn with_download_path(mut self, download_path: impl Into<String>) -> Self {
        self.download_path = Some(download_path.into());
        self
    }

    /// Git参照を設定
    pub fn with_git(mut self, git: GitSource) -> Self {
        self.git = Some(git);
        self
    }

    /// 作業ディレクトリとは別の親ディレクトリを使うか
    ///
    /// 未定義、空文字、`"."` の場合は作業ディレクトリ直下に配置する。
    pub fn effective_parent_path(&self) -> Option<&str> {
        self.parent_path
            .as_deref()
            .filter(|p| !p.is_empty() && *p != ".")
    }

    /// 空でないクローン先ディレクトリ
    pub fn effective_download_path(&self) -> Option<&str> {
        self.download_path.as_deref().filter(|p| !p.is_empty())
    }

    /// クローン元URL
    pub fn clone_url(&self) -> Option<&str> {
        self.git.as_ref().and_then(|g| g.https.as_deref())
    }

    /// チェックアウトするブランチ
    pub fn branch(&self) -> Option<&str> {
        self.git.as_ref().and_then(|g| g.branch.as_deref())
    }
}
