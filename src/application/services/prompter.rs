use thiserror::Error;

/// Prompter関連のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("No interactive terminal available to ask for {0}")]
    NotAttended(String),

    #[error("{0} must not be empty")]
    EmptyValue(String),

    #[error("Terminal interaction failed: {0}")]
    Terminal(String),
}

/// オペレーターへの問い合わせ
///
/// 本番実装はターミナルプロンプト、テストでは固定値を返す実装を使う。
pub trait Prompter {
    /// 問い合わせの前に案内を表示する
    fn show_message(&self, _message: &str) {}

    /// Gitのユーザー名を入力させる（空でない値）
    fn ask_user(&self) -> Result<String, PromptError>;

    /// Gitのパスワードを入力させる（空でない値）
    fn ask_password(&self) -> Result<String, PromptError>;

    /// `choices` から複数選択させ、選択されたインデックスを返す
    fn ask_selection(&self, message: &str, choices: &[String]) -> Result<Vec<usize>, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn show_message(&self, message: &str) {
        (**self).show_message(message)
    }

    fn ask_user(&self) -> Result<String, PromptError> {
        (**self).ask_user()
    }

    fn ask_password(&self) -> Result<String, PromptError> {
        (**self).ask_password()
    }

    fn ask_selection(&self, message: &str, choices: &[String]) -> Result<Vec<usize>, PromptError> {
        (**self).ask_selection(message, choices)
    }
}
