//! HTTP Upload Adapter
//!
//! reqwest によるHTTP PUTアップロード

pub mod classify;
pub mod client;

pub use client::HttpUploadRepository;
