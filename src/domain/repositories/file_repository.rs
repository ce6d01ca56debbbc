//! # File Repository Trait
//!
//! ローカルファイルの列挙と検査を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::upload_task::UploadTask;

/// ファイルリポジトリ
///
/// ローカルファイルシステムの読み取りのみを担当する（書き込みは行わない）。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ディレクトリ直下の通常ファイルを列挙する（再帰しない）
    ///
    /// 呼び出し時点のスナップショットを返す。サブディレクトリは含まない。
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    async fn discover_files(&self, dir: &Path) -> Result<Vec<UploadTask>>;

    /// 単一ファイルのタスクを作成する
    ///
    /// # Errors
    ///
    /// メタデータを取得できない場合にエラーを返す
    async fn inspect_file(&self, path: &Path) -> Result<UploadTask>;

    /// ディレクトリ直下の通常ファイルの合計サイズ（統計表示用）
    async fn directory_size(&self, dir: &Path) -> Result<u64>;
}
