use crate::common::error::InstallerError;
use crate::common::result::InstallerResult;
use std::collections::HashMap;
use std::fmt;

/// マニフェストのテンプレート展開に使う認証情報
///
/// 展開にのみ使用し、保存やログ出力はしない。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// 新しいCredentialsインスタンスを作成
    ///
    /// ユーザー名とパスワードはどちらも空であってはならない。
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> InstallerResult<Self> {
        let user = user.into();
        let password = password.into();

        if user.trim().is_empty() {
            return Err(InstallerError::validation_error(
                "user",
                "must not be empty",
                None,
            ));
        }
        if password.is_empty() {
            return Err(InstallerError::validation_error(
                "password",
                "must not be empty",
                None,
            ));
        }

        Ok(Self { user, password })
    }

    /// テンプレート変数（`user` と `password`）
    pub fn template_variables(&self) -> HashMap<String, String> {
        let mut variables = HashMap::new();
        variables.insert("user".to_string(), self.user.clone());
        variables.insert("password".to_string(), self.password.clone());
        variables
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
