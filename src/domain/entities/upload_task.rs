//! # UploadTask Value Object
//!
//! アップロード対象となるローカルファイル1つを表すバリューオブジェクト

use std::path::{Path, PathBuf};

/// アップロードタスク
///
/// ディレクトリ走査時（または単一ファイル指定時）に作成され、作成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTask {
    path: PathBuf,
    size: u64,
}

impl UploadTask {
    /// 新しいアップロードタスクを作成
    ///
    /// # Arguments
    ///
    /// * `path` - ローカルファイルの絶対パス
    /// * `size` - ファイルサイズ（バイト）
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// ファイルパスへの参照を返す
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 走査時点のファイルサイズを返す
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// リモートのオブジェクト名として使うベース名
    ///
    /// UTF-8 でないファイル名は別名にせず `None` を返す。
    ///
    /// ```
    /// use cxdupload::domain::entities::upload_task::UploadTask;
    ///
    /// let task = UploadTask::new("/var/log/show-tech.txt", 42);
    /// assert_eq!(task.object_name(), Some("show-tech.txt"));
    /// ```
    pub fn object_name(&self) -> Option<&str> {
        self.path.file_name()?.to_str()
    }

    /// 進捗行に表示するベース名（UTF-8 でない部分は置換される）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}
