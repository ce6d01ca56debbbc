//! # Progress Reporter Trait
//!
//! 進捗表示の出力先を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::severity::Severity;

/// 進捗レポーター
///
/// 複数のワーカーから同時に呼ばれる。実装は内部で書き込みを直列化し、
/// 行の欠落・重複・混在を起こしてはならない。
#[cfg_attr(test, automock)]
pub trait ProgressReporter: Send + Sync {
    /// 一時的なステータス行を出力
    fn write_line(&self, text: &str);

    /// 完了数カウンタを更新（`done` は `total` を超えない）
    fn set_progress(&self, done: usize, total: usize);

    /// 重大度を要求する（遷移規則は `Severity::transition`）
    fn mark_severity(&self, level: Severity);

    /// 現在の重大度
    fn severity(&self) -> Severity;

    /// 成功/失敗の終端マーカーを出してカウンタを止める
    fn finish(&self, all_succeeded: bool);
}
