//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::upload_settings::{DEFAULT_WORKERS, MAX_WORKERS, MIN_WORKERS};

/// ファイルまたはディレクトリをアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "cxdupload", version)]
#[command(about = "Upload files or directories to a TAC case via CXD", long_about = None)]
#[command(after_help = "Case, token and either file or dir arguments are required")]
pub struct Args {
    /// Print detailed stats upon exit
    #[arg(short, long)]
    pub stats: bool,

    /// Number of threads
    #[arg(
        short = 'p',
        long,
        default_value_t = DEFAULT_WORKERS,
        value_parser = parse_threads
    )]
    pub threads: usize,

    /// Cisco TAC Case #
    #[arg(short, long)]
    pub case: String,

    /// CXD Token
    #[arg(short, long)]
    pub token: String,

    #[command(flatten)]
    pub target: Target,

    /// Optional JSON config file (base_url, timeouts, proxy)
    #[arg(long)]
    pub config: Option<String>,
}

/// アップロード対象（ファイルとディレクトリは排他）
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct Target {
    /// A single file to attach
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory to attach
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// 実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    File(PathBuf),
    Directory(PathBuf),
}

impl Target {
    pub fn mode(&self) -> Option<Mode> {
        match (&self.file, &self.dir) {
            (Some(file), None) => Some(Mode::File(file.clone())),
            (None, Some(dir)) => Some(Mode::Directory(dir.clone())),
            _ => None,
        }
    }
}

fn parse_threads(value: &str) -> Result<usize, String> {
    let threads: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (MIN_WORKERS..=MAX_WORKERS).contains(&threads) {
        Ok(threads)
    } else {
        Err(format!(
            "{} is not in {}..={}",
            threads, MIN_WORKERS, MAX_WORKERS
        ))
    }
}
