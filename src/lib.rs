//! # cxdupload
//!
//! ファイル1つ、またはディレクトリ直下の全ファイルを HTTP PUT でアップロードするツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: アップロードのエンティティとRepository trait（外部依存なし）
//! - **Application層**: ファイル単位・ディレクトリ単位のアップロード（ユースケース）
//! - **Adapter層**: 外部システムとの統合（reqwest, ファイルシステム, indicatif）
//! - **Driver層**: CLI、依存性注入、終了コード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時にネットワーク依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
