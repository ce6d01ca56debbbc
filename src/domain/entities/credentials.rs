//! # Credentials
//!
//! ケース番号とトークンの組（HTTP Basic認証に使用）

use std::fmt;

/// 認証情報
///
/// プロセスの生存期間中は不変。`Debug` 出力ではトークンを伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    case_id: String,
    token: String,
}

impl Credentials {
    pub fn new(case_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            token: token.into(),
        }
    }

    /// Basic認証のユーザー名
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    /// Basic認証のパスワード
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("case_id", &self.case_id)
            .field("token", &"<redacted>")
            .finish()
    }
}
