//! # Severity
//!
//! 進捗表示の色（重大度）と、その遷移規則

/// 実行全体の重大度
///
/// 表示上は Normal=緑, Warning=黄, Error=赤 に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Error,
}

impl Severity {
    /// 現在の重大度に `requested` を適用した結果を返します。
    ///
    /// - `Error` の要求は常に `Error` になる
    /// - `Warning` の要求は現在が `Error` の場合のみ適用される（失敗後の成功）
    /// - それ以外の要求は現在値を維持する
    ///
    /// # 例
    ///
    /// ```
    /// use cxdupload::domain::entities::severity::Severity;
    ///
    /// let state = Severity::Normal.transition(Severity::Warning);
    /// assert_eq!(state, Severity::Normal);
    ///
    /// let state = state.transition(Severity::Error);
    /// assert_eq!(state, Severity::Error);
    ///
    /// let state = state.transition(Severity::Warning);
    /// assert_eq!(state, Severity::Warning);
    /// ```
    pub fn transition(self, requested: Severity) -> Severity {
        match (self, requested) {
            (_, Severity::Error) => Severity::Error,
            (Severity::Error, Severity::Warning) => Severity::Warning,
            (current, _) => current,
        }
    }

    /// indicatif のテンプレートで使う色名
    pub fn color(self) -> &'static str {
        match self {
            Severity::Normal => "green",
            Severity::Warning => "yellow",
            Severity::Error => "red",
        }
    }
}
