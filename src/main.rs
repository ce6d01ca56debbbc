//! cxdupload - CXD File Uploader
//!
//! ファイルまたはディレクトリをケースにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use cxdupload::adapter::config::Config;
use cxdupload::driver::{Args, SessionRunner};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when --config is not given)
    let config = Config::load_or_default(args.config.as_deref())?;

    // Create runner with injected dependencies
    let runner = SessionRunner::new(&config)?;

    let status = runner.execute(&args).await?;

    std::process::exit(status.code());
}
