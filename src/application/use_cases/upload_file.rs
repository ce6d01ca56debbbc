//! # Upload File Use Case
//!
//! ファイル1つをアップロードし、前後の進捗行と重大度を報告するユースケース

use log::{debug, warn};
use std::sync::Arc;

use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::entities::upload_task::UploadTask;
use crate::domain::repositories::progress_reporter::ProgressReporter;
use crate::domain::repositories::upload_repository::UploadRepository;

/// ファイルアップロードユースケース
///
/// 送信前に1行、結果確定後に1行だけ出力する。リトライはしない。
pub struct UploadFileUseCase<U: UploadRepository> {
    upload_repository: Arc<U>,
    reporter: Arc<dyn ProgressReporter>,
}

impl<U: UploadRepository> UploadFileUseCase<U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    /// * `reporter` - 進捗レポーター（全ワーカーで共有）
    pub fn new(upload_repository: Arc<U>, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            upload_repository,
            reporter,
        }
    }

    /// ファイルをアップロードする
    ///
    /// # Returns
    ///
    /// 分類済みのアップロード結果（失敗もエラーではなく値として返す）
    pub async fn execute(&self, task: &UploadTask, credentials: &Credentials) -> UploadOutcome {
        let file_name = task.file_name();
        self.reporter
            .write_line(&format!("Executing file upload of {}", file_name));

        let outcome = self.upload_repository.put_file(task, credentials).await;

        if outcome.is_success() {
            debug!("{} ({} bytes) uploaded", task.path().display(), task.size());
        } else {
            warn!("{}: {:?}", task.path().display(), outcome);
        }

        self.reporter.write_line(&outcome.describe(&file_name));
        self.reporter.mark_severity(outcome.severity());

        outcome
    }
}
