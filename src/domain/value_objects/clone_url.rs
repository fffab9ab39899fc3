use std::fmt;
use url::Url;

/// クローン元URLの値オブジェクト
///
/// マニフェストのテンプレート展開で認証情報が埋め込まれることがあるため、
/// 表示時は常にパスワードを伏せる。実際のコマンドには [`CloneUrl::as_str`] を渡す。
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CloneUrl {
    url: String,
}

impl CloneUrl {
    /// 伏せ字に使う文字列
    pub const MASK: &'static str = "***";

    /// 新しいCloneUrlインスタンスを作成
    ///
    /// 文字列は検証しない。`git` が受け付ける形式はURL以外にもあるため。
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// コマンドに渡す元のURL
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// パスワードを伏せたURL
    pub fn redacted(&self) -> String {
        match Url::parse(&self.url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                if parsed.set_password(Some(Self::MASK)).is_ok() {
                    parsed.to_string()
                } else {
                    Self::MASK.to_string()
                }
            }
            Ok(_) => self.url.clone(),
            // scp形式（user@host:path）などはそのまま表示する
            Err(_) => self.url.clone(),
        }
    }
}

impl fmt::Display for CloneUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl fmt::Debug for CloneUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CloneUrl").field(&self.redacted()).finish()
    }
}
