/// インストール対象として選択されたアプリケーション名
///
/// 選択順を保持し、重複は除去しない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// 新しいSelectionインスタンスを作成
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// 空の選択
    pub fn empty() -> Self {
        Self::default()
    }

    /// 選択順の名前
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 選択数
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 何も選択されていないか
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 選択順のイテレータ
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order_and_duplicates() {
        let selection = Selection::new(["B", "A", "B"]);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["B", "A", "B"]);
    }

    #[test]
    fn test_empty() {
        let selection = Selection::empty();
        assert!(selection.is_empty());
        assert_eq!(selection.names().len(), 0);
    }
}
