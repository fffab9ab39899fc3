use crate::application::services::prompter::{PromptError, Prompter};
use crate::domain::entities::manifest::Manifest;
use crate::domain::value_objects::selection::Selection;
use thiserror::Error;
use tracing::debug;

/// SelectApplications関連のエラー
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Application '{0}' is not defined in the manifest")]
    UnknownApplication(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// インストール対象アプリケーションの選択ユースケース
pub struct SelectApplicationsUseCase<P> {
    prompter: P,
}

impl<P: Prompter> SelectApplicationsUseCase<P> {
    /// 選択プロンプトのメッセージ
    pub const PROMPT_MESSAGE: &'static str = "Select applications to install";

    /// 新しいSelectApplicationsUseCaseインスタンスを作成
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// 選択を実行
    ///
    /// `preselected` が空でなければプロンプトを出さずにその順序で選択する。
    /// マニフェストが空の場合は何も問い合わせず空の選択を返す。
    pub fn execute(
        &self,
        manifest: &Manifest,
        preselected: &[String],
    ) -> Result<Selection, SelectionError> {
        if manifest.is_empty() {
            debug!("manifest has no applications, nothing to select");
            return Ok(Selection::empty());
        }

        if !preselected.is_empty() {
            return Self::from_names(manifest, preselected);
        }

        let choices: Vec<String> = manifest.names().into_iter().map(String::from).collect();
        let indices = self
            .prompter
            .ask_selection(Self::PROMPT_MESSAGE, &choices)?;

        let selection = Selection::new(indices.into_iter().filter_map(|i| choices.get(i).cloned()));
        debug!(selected = ?selection.names(), "operator selection");
        Ok(selection)
    }

    /// 名前のリストを検証して選択に変換
    fn from_names(manifest: &Manifest, names: &[String]) -> Result<Selection, SelectionError> {
        if let Some(unknown) = names.iter().find(|n| !manifest.contains(n)) {
            return Err(SelectionError::UnknownApplication(unknown.clone()));
        }
        Ok(Selection::new(names.iter().cloned()))
    }
}
