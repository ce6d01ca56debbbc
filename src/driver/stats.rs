//! Run Statistics
//!
//! 実行後の所要時間・スループット表示

use indicatif::{BinaryBytes, HumanDuration};
use std::time::Duration;

use crate::domain::services::throughput::bytes_per_second;

/// `--stats` 指定時のサマリー行
pub fn stats_line(size: u64, elapsed: Duration) -> String {
    format!(
        "Uploaded {} in {} at an average rate of {}/s",
        BinaryBytes(size),
        HumanDuration(elapsed),
        BinaryBytes(bytes_per_second(size, elapsed))
    )
}

/// `--stats` なしの場合の所要時間行
pub fn upload_time_line(elapsed: Duration) -> String {
    format!("Upload time: {}", HumanDuration(elapsed))
}
