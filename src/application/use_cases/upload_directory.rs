//! # Upload Directory Use Case
//!
//! ディレクトリ直下のファイルを固定サイズのワーカープールで並列アップロードするユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::application::dto::upload_settings::{MAX_WORKERS, MIN_WORKERS};
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::domain::entities::batch_result::BatchResult;
use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::progress_reporter::ProgressReporter;
use crate::domain::repositories::upload_repository::UploadRepository;

/// ディスパッチャーの構成エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("worker count must be between {min} and {max}, got {got}")]
    InvalidWorkerCount { got: usize, min: usize, max: usize },
}

/// ディレクトリアップロードユースケース
///
/// 1. ディレクトリのスナップショットを取得（非再帰）
/// 2. ファイルごとに1タスクをワーカープールへ投入
/// 3. 完了順に結果を集計し、進捗カウンタを更新
///
/// あるタスクの失敗は他のタスクに影響しない。
pub struct UploadDirectoryUseCase<F: FileRepository, U: UploadRepository> {
    file_repository: Arc<F>,
    upload_file: Arc<UploadFileUseCase<U>>,
    reporter: Arc<dyn ProgressReporter>,
    workers: usize,
}

impl<F, U> UploadDirectoryUseCase<F, U>
where
    F: FileRepository,
    U: UploadRepository + 'static,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    /// * `upload_repository` - アップロードリポジトリ
    /// * `reporter` - 進捗レポーター
    /// * `workers` - 同時アップロード数（1〜8）
    ///
    /// # Errors
    ///
    /// ワーカー数が範囲外の場合に `DispatchError::InvalidWorkerCount` を返す
    pub fn new(
        file_repository: Arc<F>,
        upload_repository: Arc<U>,
        reporter: Arc<dyn ProgressReporter>,
        workers: usize,
    ) -> Result<Self, DispatchError> {
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&workers) {
            return Err(DispatchError::InvalidWorkerCount {
                got: workers,
                min: MIN_WORKERS,
                max: MAX_WORKERS,
            });
        }

        let upload_file = Arc::new(UploadFileUseCase::new(upload_repository, reporter.clone()));

        Ok(Self {
            file_repository,
            upload_file,
            reporter,
            workers,
        })
    }

    /// ディレクトリ内の全ファイルをアップロードする
    ///
    /// 全タスクの結果が揃うまで戻らない。
    ///
    /// # Errors
    ///
    /// ディレクトリの列挙に失敗した場合にエラーを返す（アップロード前）
    pub async fn execute(&self, dir: &Path, credentials: Arc<Credentials>) -> Result<BatchResult> {
        let tasks = self
            .file_repository
            .discover_files(dir)
            .await
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

        let total = tasks.len();
        info!(
            "Uploading {} files from {} with {} workers",
            total,
            dir.display(),
            self.workers
        );

        let mut batch = BatchResult::new(total);
        self.reporter.set_progress(0, total);

        let permits = Arc::new(Semaphore::new(self.workers));
        let mut in_flight = JoinSet::new();

        for task in tasks {
            let permits = permits.clone();
            let upload_file = self.upload_file.clone();
            let credentials = credentials.clone();

            in_flight.spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return UploadOutcome::Transport(format!("worker pool closed: {}", e)),
                };
                upload_file.execute(&task, &credentials).await
            });
        }

        while let Some(joined) = in_flight.join_next().await {
            let outcome = joined.unwrap_or_else(|e| {
                warn!("Upload worker did not finish: {}", e);
                UploadOutcome::Transport(format!("upload worker aborted: {}", e))
            });

            batch.record(&outcome);
            if outcome.is_success() {
                self.reporter.set_progress(batch.succeeded(), total);
            }
        }

        if !batch.is_complete() {
            warn!(
                "Only {} of {} uploads reported an outcome",
                batch.succeeded() + batch.failed(),
                batch.total()
            );
        }
        info!(
            "Directory upload finished: {} of {} succeeded, {} failed",
            batch.succeeded(),
            batch.total(),
            batch.failed()
        );
        self.reporter.finish(batch.is_success());

        Ok(batch)
    }
}
