//! Adapter Layer
//!
//! 外部システム（HTTPアップロード先、ファイルシステム、ターミナル）との統合

pub mod config;
pub mod http;
pub mod progress;
pub mod repositories;
