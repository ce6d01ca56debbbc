//! # Domain Layer
//!
//! このモジュールはアップロードの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - HTTPやファイルシステムについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadTask, UploadOutcome, BatchResultなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（スループット計算）

pub mod entities;
pub mod repositories;
pub mod services;
