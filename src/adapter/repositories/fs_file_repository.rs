//! File System Repository Implementation
//!
//! FileRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::upload_task::UploadTask;
use crate::domain::repositories::file_repository::FileRepository;

/// ファイルシステムベースのファイルリポジトリ
pub struct FsFileRepository;

impl FsFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ディレクトリ直下の通常ファイルを列挙する（内部実装）
    ///
    /// シンボリックリンクは辿り、リンク先が通常ファイルなら含める。
    /// ファイル名順にソートするため、同じ内容なら同じ順序になる。
    fn discover_files_internal(dir: &Path) -> Result<Vec<UploadTask>> {
        // 読めないディレクトリは列挙前にエラーにする
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let mut tasks = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            tasks.push(UploadTask::new(absolute(entry.path()), size));
        }

        info!("Found {} files in {}", tasks.len(), dir.display());

        Ok(tasks)
    }

    fn inspect_file_internal(path: &Path) -> Result<UploadTask> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read metadata: {}", path.display()))?;
        Ok(UploadTask::new(absolute(path), metadata.len()))
    }

    fn directory_size_internal(dir: &Path) -> Result<u64> {
        Ok(Self::discover_files_internal(dir)?
            .iter()
            .map(UploadTask::size)
            .sum())
    }
}

/// 相対パスをカレントディレクトリ基準の絶対パスにする
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[async_trait]
impl FileRepository for FsFileRepository {
    async fn discover_files(&self, dir: &Path) -> Result<Vec<UploadTask>> {
        // 非同期なので、tokio::task::spawn_blockingでラップ
        let dir = dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::discover_files_internal(&dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn inspect_file(&self, path: &Path) -> Result<UploadTask> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::inspect_file_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn directory_size(&self, dir: &Path) -> Result<u64> {
        let dir = dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::directory_size_internal(&dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FsFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
