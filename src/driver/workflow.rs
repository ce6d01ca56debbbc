//! Session Orchestration
//!
//! 単一ファイル/ディレクトリのモード判定、ユースケースの起動、統計表示

use anyhow::{bail, Result};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::adapter::config::Config;
use crate::adapter::http::HttpUploadRepository;
use crate::adapter::progress::SpinnerReporter;
use crate::adapter::repositories::fs_file_repository::FsFileRepository;
use crate::application::use_cases::upload_directory::UploadDirectoryUseCase;
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::domain::entities::credentials::Credentials;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::progress_reporter::ProgressReporter;

use super::cli::{Args, Mode};
use super::exit_status::RunStatus;
use super::stats::{stats_line, upload_time_line};

/// `~` を展開し、カレントディレクトリ基準の絶対パスにする
pub fn resolve_path(path: &Path) -> PathBuf {
    let expanded = shellexpand::path::tilde(path).into_owned();
    if expanded.is_absolute() {
        return expanded;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&expanded))
        .unwrap_or(expanded)
}

/// Session Runner
pub struct SessionRunner {
    file_repository: Arc<FsFileRepository>,
    upload_repository: Arc<HttpUploadRepository>,
    reporter: Option<Arc<dyn ProgressReporter>>,
}

impl SessionRunner {
    /// Create a runner with dependency injection from the loaded config
    pub fn new(config: &Config) -> Result<Self> {
        let settings = config.upload_settings();
        let upload_repository = Arc::new(HttpUploadRepository::new(&settings)?);

        Ok(Self {
            file_repository: Arc::new(FsFileRepository::new()),
            upload_repository,
            reporter: None,
        })
    }

    /// Use `reporter` instead of a terminal spinner
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    fn reporter(&self) -> Arc<dyn ProgressReporter> {
        match &self.reporter {
            Some(reporter) => reporter.clone(),
            None => Arc::new(SpinnerReporter::new("Uploading")),
        }
    }

    /// Execute one upload session
    ///
    /// Per-file failures are part of the returned status, not errors.
    pub async fn execute(&self, args: &Args) -> Result<RunStatus> {
        let started = Instant::now();
        let Some(mode) = args.target.mode() else {
            bail!("exactly one of --file or --dir is required");
        };
        let credentials = Arc::new(Credentials::new(args.case.clone(), args.token.clone()));

        match mode {
            Mode::Directory(dir) => {
                let dir = resolve_path(&dir);
                self.run_directory(&dir, credentials, args.threads, args.stats, started)
                    .await
            }
            Mode::File(file) => {
                let file = resolve_path(&file);
                self.run_file(&file, credentials, args.stats, started).await
            }
        }
    }

    async fn run_directory(
        &self,
        dir: &Path,
        credentials: Arc<Credentials>,
        workers: usize,
        stats: bool,
        started: Instant,
    ) -> Result<RunStatus> {
        if !dir.is_dir() {
            println!("{} is not a directory.", dir.display());
            return Ok(RunStatus::InvalidPath);
        }
        info!("Directory mode: {}", dir.display());

        let use_case = UploadDirectoryUseCase::new(
            self.file_repository.clone(),
            self.upload_repository.clone(),
            self.reporter(),
            workers,
        )?;
        let batch = use_case.execute(dir, credentials).await?;

        let size = if stats {
            Some(self.file_repository.directory_size(dir).await?)
        } else {
            None
        };
        print_summary(size, started.elapsed());

        Ok(RunStatus::Directory(batch))
    }

    async fn run_file(
        &self,
        file: &Path,
        credentials: Arc<Credentials>,
        stats: bool,
        started: Instant,
    ) -> Result<RunStatus> {
        if !file.is_file() {
            println!("{} is not a file.", file.display());
            return Ok(RunStatus::InvalidPath);
        }
        info!("File mode: {}", file.display());

        let task = self.file_repository.inspect_file(file).await?;
        let reporter = self.reporter();
        let use_case = UploadFileUseCase::new(self.upload_repository.clone(), reporter.clone());

        let outcome = use_case.execute(&task, &credentials).await;
        reporter.finish(outcome.is_success());

        print_summary(stats.then_some(task.size()), started.elapsed());

        Ok(RunStatus::File(outcome))
    }
}

fn print_summary(size: Option<u64>, elapsed: Duration) {
    match size {
        Some(size) => println!("{}", stats_line(size, elapsed)),
        None => println!("{}", upload_time_line(elapsed)),
    }
}
