//! # Domain Services
//!
//! エンティティに属さない純粋な計算

pub mod throughput;
