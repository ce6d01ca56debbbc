//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してアップロードを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - 実行結果を終了コードに変換する
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: セッション全体のオーケストレーション
//! - **exit_status**: 終了コードへの変換
//! - **stats**: 所要時間とスループットの表示

pub mod cli;
pub mod exit_status;
pub mod stats;
pub mod workflow;

pub use cli::Args;
pub use exit_status::RunStatus;
pub use workflow::SessionRunner;
