use super::application::Application;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// アプリケーションマニフェスト
///
/// JSON配列としてそのままシリアライズされる。読み込み後は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    /// マニフェストに記述された順序のアプリケーション定義
    pub applications: Vec<Application>,
}

impl Manifest {
    /// 新しいManifestインスタンスを作成
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    /// アプリケーション数
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    /// アプリケーションが1つもないか
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// マニフェスト順のアプリケーション名
    pub fn names(&self) -> Vec<&str> {
        self.applications.iter().map(|a| a.name.as_str()).collect()
    }

    /// 名前でアプリケーションを検索（最初に一致したもの）
    pub fn find(&self, name: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.name == name)
    }

    /// 名前が存在するか
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// 重複しているアプリケーション名を出現順に返す
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for app in &self.applications {
            if !seen.insert(app.name.as_str()) && !duplicates.contains(&app.name.as_str()) {
                duplicates.push(app.name.as_str());
            }
        }
        duplicates
    }
}
