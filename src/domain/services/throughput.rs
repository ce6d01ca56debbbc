//! # Throughput Service
//!
//! 転送量と経過時間から平均転送レートを求める

use std::time::Duration;

/// 平均転送レート（バイト/秒、四捨五入）
///
/// 経過時間が0の場合は転送量をそのまま返す。
///
/// ```
/// use std::time::Duration;
/// use cxdupload::domain::services::throughput::bytes_per_second;
///
/// assert_eq!(bytes_per_second(1000, Duration::from_secs(4)), 250);
/// ```
pub fn bytes_per_second(bytes: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs <= f64::EPSILON {
        return bytes;
    }
    (bytes as f64 / secs).round() as u64
}
