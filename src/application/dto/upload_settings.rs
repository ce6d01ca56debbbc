//! # Upload Settings DTO
//!
//! アップロード設定のData Transfer Object

use std::time::Duration;

/// 既定のアップロード先
pub const DEFAULT_BASE_URL: &str = "https://cxd.cisco.com/home/";
/// 接続・応答タイムアウトの既定値（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const MIN_WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 8;
pub const DEFAULT_WORKERS: usize = 4;

/// アップロード設定
///
/// 設定ファイルから組み立てられ、HTTPアダプターに渡される。
/// 同時アップロード数は実行ごとのCLI引数なので、ここには含めない。
#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// オブジェクトURLのベース（末尾にファイル名を付加する）
    pub base_url: String,
    /// 接続確立のタイムアウト
    pub connect_timeout: Duration,
    /// 応答待ち（読み取り）のタイムアウト
    pub read_timeout: Duration,
    /// HTTP_PROXY などの環境変数を使うかどうか
    pub use_system_proxy: bool,
}

impl UploadSettings {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::time::Duration;
    /// use cxdupload::application::dto::upload_settings::UploadSettings;
    ///
    /// let settings = UploadSettings::new(
    ///     "https://cxd.cisco.com/home/".to_string(),
    ///     Duration::from_secs(120),
    ///     Duration::from_secs(120),
    ///     true,
    /// );
    ///
    /// assert!(settings.use_system_proxy);
    /// assert_eq!(settings.connect_timeout, Duration::from_secs(120));
    /// ```
    pub fn new(
        base_url: String,
        connect_timeout: Duration,
        read_timeout: Duration,
        use_system_proxy: bool,
    ) -> Self {
        Self {
            base_url,
            connect_timeout,
            read_timeout,
            use_system_proxy,
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            true,
        )
    }
}
