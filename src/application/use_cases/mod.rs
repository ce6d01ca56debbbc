//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadFileUseCase**: ファイル1つのアップロードと進捗行の出力
//! - **UploadDirectoryUseCase**: ワーカープールによるディレクトリ一括アップロード

pub mod upload_directory;
pub mod upload_file;
