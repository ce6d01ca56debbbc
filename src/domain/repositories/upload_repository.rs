//! # Upload Repository Trait
//!
//! ファイル1つのリモート送信を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::entities::upload_task::UploadTask;

/// アップロードリポジトリ
///
/// 失敗も `UploadOutcome` として返すため、このメソッドはエラーを返さない。
/// リトライは行わない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// ファイルを送信し、結果を分類して返す
    ///
    /// # Arguments
    ///
    /// * `task` - 送信するファイル
    /// * `credentials` - Basic認証に使う認証情報
    async fn put_file(&self, task: &UploadTask, credentials: &Credentials) -> UploadOutcome;
}
