//! # UploadOutcome
//!
//! アップロード1回の最終的な分類結果

use super::severity::Severity;

/// アップロード結果
///
/// `UploadTask` 1つにつき必ず1つだけ生成される。
/// 数値の終了コードへの変換は Driver層の境界でのみ行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// HTTP 201
    Succeeded,
    /// HTTP 401
    AuthFailed,
    /// 201/401 以外のHTTPステータス
    RemoteRejected(u16),
    /// 接続または応答がタイムアウト内に完了しなかった
    ConnectTimeout,
    /// ローカルファイルを開けない・読めない
    LocalIo(String),
    /// DNS、リセット、プロトコル違反などその他の通信エラー
    Transport(String),
}

impl UploadOutcome {
    /// HTTPステータスコードから結果を分類
    ///
    /// ```
    /// use cxdupload::domain::entities::upload_outcome::UploadOutcome;
    ///
    /// assert_eq!(UploadOutcome::from_status(201), UploadOutcome::Succeeded);
    /// assert_eq!(UploadOutcome::from_status(401), UploadOutcome::AuthFailed);
    /// assert_eq!(UploadOutcome::from_status(200), UploadOutcome::RemoteRejected(200));
    /// ```
    pub fn from_status(status: u16) -> Self {
        match status {
            201 => UploadOutcome::Succeeded,
            401 => UploadOutcome::AuthFailed,
            other => UploadOutcome::RemoteRejected(other),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Succeeded)
    }

    /// この結果が進捗表示に要求する重大度
    ///
    /// 成功は `Warning` を要求する（直前が `Error` の場合のみ黄色に戻る）。
    pub fn severity(&self) -> Severity {
        if self.is_success() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// ファイル名を含むユーザー向けの1行メッセージ
    pub fn describe(&self, file_name: &str) -> String {
        match self {
            UploadOutcome::Succeeded => format!("{} uploaded successfully", file_name),
            UploadOutcome::AuthFailed => format!(
                "{}: failed authentication, please verify your case # and token",
                file_name
            ),
            UploadOutcome::RemoteRejected(code) => {
                format!("{} failed with response code {}", file_name, code)
            }
            UploadOutcome::ConnectTimeout => format!("Upload connect timeout {}", file_name),
            UploadOutcome::LocalIo(detail) => format!("IOError: {} - {}", file_name, detail),
            UploadOutcome::Transport(detail) => format!("Upload failed {} - {}", file_name, detail),
        }
    }
}
