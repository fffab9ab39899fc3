use crate::domain::entities::{application::Application, manifest::Manifest};
use crate::domain::value_objects::{
    clone_url::CloneUrl,
    install_outcome::{FailureReason, InstallOutcome},
    selection::Selection,
};
use crate::infrastructure::scm::{ScmError, ScmOperations};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// InstallApplications関連のエラー
///
/// いずれもアプリケーション1件の失敗として扱われ、ループは継続する。
#[derive(Debug, Error)]
pub enum InstallApplicationsError {
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SCM operation failed: {0}")]
    ScmOperationFailed(#[from] ScmError),
}

/// インストール結果の通知先
pub trait Reporter {
    /// インストール開始の通知
    fn installing(&mut self, _name: &str) {}

    /// 失敗理由の通知（`report` の直前に呼ばれる）
    fn notice(&mut self, _name: &str, _reason: &FailureReason) {}

    /// 結果の通知（アプリケーションごとに1回）
    fn report(&mut self, name: &str, installed: bool);
}

/// アプリケーションインストールの設定
#[derive(Debug, Clone, Default)]
pub struct InstallApplicationsConfig {
    /// インストール先のルートディレクトリ（通常はマニフェストのあるディレクトリ）
    pub working_root: Option<PathBuf>,

    /// クローンの終了コードを検証するか（falseの場合は失敗しても成功扱い）
    pub verify_clone: bool,
}

impl InstallApplicationsConfig {
    pub fn new(working_root: impl Into<PathBuf>) -> Self {
        Self {
            working_root: Some(working_root.into()),
            verify_clone: false,
        }
    }

    pub fn with_verify_clone(mut self, verify_clone: bool) -> Self {
        self.verify_clone = verify_clone;
        self
    }
}

/// インストール処理全体の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// 試行順のアプリケーション名と結果
    pub outcomes: Vec<(String, InstallOutcome)>,
}

impl InstallSummary {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, name: &str, outcome: InstallOutcome) {
        self.outcomes.push((name.to_string(), outcome));
    }

    /// 試行した数
    pub fn attempted_count(&self) -> usize {
        self.outcomes.len()
    }

    /// インストールされた数
    pub fn installed_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_installed()).count()
    }

    /// インストールされなかった数
    pub fn failed_count(&self) -> usize {
        self.attempted_count() - self.installed_count()
    }

    /// 全て成功したか
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// 試行順のアプリケーション名
    pub fn names(&self) -> Vec<&str> {
        self.outcomes.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// 選択されたアプリケーションを順番にインストールするユースケース
pub struct InstallApplicationsUseCase<S> {
    /// インストール設定
    config: InstallApplicationsConfig,

    /// バージョン管理クライアント
    scm: S,
}

impl<S: ScmOperations> InstallApplicationsUseCase<S> {
    /// 新しいInstallApplicationsUseCaseインスタンスを作成
    pub fn new(config: InstallApplicationsConfig, scm: S) -> Self {
        Self { config, scm }
    }

    /// 選択順にインストールを実行
    ///
    /// 1件の失敗で全体が中断されることはない。同じ名前が複数回選択された場合は
    /// 最初の1回だけ試行する。
    pub async fn execute<R: Reporter + ?Sized>(
        &self,
        manifest: &Manifest,
        selection: &Selection,
        reporter: &mut R,
    ) -> InstallSummary {
        let mut summary = InstallSummary::new();
        let mut attempted = HashSet::new();

        for name in selection.iter() {
            if !attempted.insert(name) {
                warn!(application = name, "already attempted in this run, skipping");
                continue;
            }

            reporter.installing(name);

            let outcome = match manifest.find(name) {
                Some(app) => match self.install_application(app).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!(application = name, error = %e, "installation failed unexpectedly");
                        FailureReason::Fault(e.to_string()).into()
                    }
                },
                None => FailureReason::UnknownApplication.into(),
            };

            if let Some(reason) = outcome.failure_reason() {
                warn!(application = name, %reason, "application not installed");
                reporter.notice(name, reason);
            }
            reporter.report(name, outcome.is_installed());
            summary.record(name, outcome);
        }

        info!(
            attempted = summary.attempted_count(),
            installed = summary.installed_count(),
            "installation finished"
        );
        summary
    }

    /// アプリケーション1件のインストール
    ///
    /// 前提条件を満たさない場合は `NotInstalled` を返す。`Err` はディレクトリ作成や
    /// コマンド起動の失敗など予期しないものに限る。
    #[instrument(skip_all, fields(application = %app.name))]
    pub async fn install_application(
        &self,
        app: &Application,
    ) -> Result<InstallOutcome, InstallApplicationsError> {
        // 1. 作業ディレクトリ
        let Some(root) = self.config.working_root.as_deref() else {
            return Ok(FailureReason::MissingWorkingRoot.into());
        };

        // 2. 親ディレクトリ
        let main_path = match app.effective_parent_path() {
            Some(parent) => {
                let path = root.join(parent);
                if !path.exists() {
                    debug!(path = %path.display(), "creating parent directory");
                    tokio::fs::create_dir_all(&path).await.map_err(|source| {
                        InstallApplicationsError::DirectoryCreationFailed {
                            path: path.display().to_string(),
                            source,
                        }
                    })?;
                }
                path
            }
            None => root.to_path_buf(),
        };

        // 3. クローン先
        let Some(download_path) = app.effective_download_path() else {
            return Ok(FailureReason::MissingDownloadPath.into());
        };

        // 4. 既存ディレクトリは上書きしない
        let target = main_path.join(download_path);
        if target.exists() {
            return Ok(FailureReason::AlreadyExists(target).into());
        }

        // 5. クローン元
        let Some(url) = app.clone_url() else {
            return Ok(FailureReason::MissingGitUrl.into());
        };
        let url = CloneUrl::new(url);

        // 6. クローンとブランチのチェックアウト
        info!(url = %url, dest = %target.display(), "cloning repository");
        let output = self
            .scm
            .clone_repository(url.as_str(), &main_path, download_path)
            .await?;

        if !output.is_success() {
            if self.config.verify_clone {
                return Ok(FailureReason::CloneFailed {
                    exit_code: output.exit_code,
                }
                .into());
            }
            // 終了コードは検証しない（--verify-clone で有効化）
            warn!(
                exit_code = ?output.exit_code,
                stderr = %output.stderr,
                "clone exited with a failure status, treating as installed"
            );
        }

        if let Some(branch) = app.branch() {
            match self.scm.checkout_branch(&target, branch).await {
                Ok(out) if out.is_success() => debug!(branch, "checked out branch"),
                Ok(out) => warn!(
                    branch,
                    exit_code = ?out.exit_code,
                    stderr = %out.stderr,
                    "branch checkout failed"
                ),
                Err(e) => warn!(branch, error = %e, "branch checkout could not run"),
            }
        }

        Ok(InstallOutcome::Installed)
    }
}
