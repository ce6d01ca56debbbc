//! # Domain Entities
//!
//! アップロードに関するエンティティとバリューオブジェクト

pub mod batch_result;
pub mod credentials;
pub mod severity;
pub mod upload_outcome;
pub mod upload_task;
