//! # BatchResult
//!
//! ディレクトリアップロード全体の集計結果

use super::upload_outcome::UploadOutcome;

/// バッチ結果
///
/// 結果が届くたびに `record` で積み上げる。`succeeded <= recorded <= total` を常に満たす。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    total: usize,
    recorded: usize,
    succeeded: usize,
    auth_failures: usize,
}

impl BatchResult {
    /// `total` 件のタスクに対する空の集計を作成
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// 結果を1件記録する
    ///
    /// `total` を超える記録は無視する。
    pub fn record(&mut self, outcome: &UploadOutcome) {
        if self.recorded >= self.total {
            return;
        }
        self.recorded += 1;
        match outcome {
            UploadOutcome::Succeeded => self.succeeded += 1,
            UploadOutcome::AuthFailed => self.auth_failures += 1,
            _ => {}
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.recorded - self.succeeded
    }

    /// 認証失敗（HTTP 401）の件数
    #[inline]
    pub fn auth_failures(&self) -> usize {
        self.auth_failures
    }

    /// すべてのタスクの結果が記録されたか
    pub fn is_complete(&self) -> bool {
        self.recorded == self.total
    }

    /// バッチが完全に成功したかチェックします。
    ///
    /// # 例
    ///
    /// ```
    /// use cxdupload::domain::entities::batch_result::BatchResult;
    /// use cxdupload::domain::entities::upload_outcome::UploadOutcome;
    ///
    /// // 空のディレクトリは成功扱い
    /// assert!(BatchResult::new(0).is_success());
    ///
    /// let mut batch = BatchResult::new(2);
    /// batch.record(&UploadOutcome::Succeeded);
    /// batch.record(&UploadOutcome::RemoteRejected(500));
    /// assert!(!batch.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.succeeded == self.total
    }
}
