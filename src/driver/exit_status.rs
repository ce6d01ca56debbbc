//! Exit Status Mapping
//!
//! 実行結果をプロセスの終了コードに変換する（数値化はこの境界でのみ行う）

use crate::domain::entities::batch_result::BatchResult;
use crate::domain::entities::upload_outcome::UploadOutcome;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_BATCH_FAILED: i32 = 1;
pub const EXIT_INVALID_PATH: i32 = 255;
pub const EXIT_AUTH_FAILED: i32 = 401;
pub const EXIT_CONNECT_TIMEOUT: i32 = 1000;
pub const EXIT_LOCAL_IO: i32 = 1001;
pub const EXIT_TRANSPORT: i32 = 1002;

/// 1回の実行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// 指定パスが期待した種類（ファイル/ディレクトリ）ではない
    InvalidPath,
    /// 単一ファイルモードの結果
    File(UploadOutcome),
    /// ディレクトリモードの結果
    Directory(BatchResult),
}

impl RunStatus {
    /// プロセス終了コード
    ///
    /// ```
    /// use cxdupload::domain::entities::upload_outcome::UploadOutcome;
    /// use cxdupload::driver::exit_status::RunStatus;
    ///
    /// assert_eq!(RunStatus::File(UploadOutcome::Succeeded).code(), 0);
    /// assert_eq!(RunStatus::File(UploadOutcome::AuthFailed).code(), 401);
    /// assert_eq!(RunStatus::InvalidPath.code(), 255);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            RunStatus::InvalidPath => EXIT_INVALID_PATH,
            RunStatus::File(outcome) => outcome_code(outcome),
            RunStatus::Directory(batch) => {
                if batch.is_success() {
                    EXIT_SUCCESS
                } else if batch.auth_failures() > 0 {
                    EXIT_AUTH_FAILED
                } else {
                    EXIT_BATCH_FAILED
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.code() == EXIT_SUCCESS
    }
}

fn outcome_code(outcome: &UploadOutcome) -> i32 {
    match outcome {
        UploadOutcome::Succeeded => EXIT_SUCCESS,
        UploadOutcome::AuthFailed => EXIT_AUTH_FAILED,
        UploadOutcome::RemoteRejected(status) => remote_status_code(*status),
        UploadOutcome::ConnectTimeout => EXIT_CONNECT_TIMEOUT,
        UploadOutcome::LocalIo(_) => EXIT_LOCAL_IO,
        UploadOutcome::Transport(_) => EXIT_TRANSPORT,
    }
}

/// HTTP ステータスをそのまま終了コードにする
///
/// 下位8ビットが0になるコード（256, 512, ...）はシェルから成功に見えるため、
/// `EXIT_BATCH_FAILED` に置き換える。
fn remote_status_code(status: u16) -> i32 {
    let code = i32::from(status);
    if code % 256 == 0 {
        EXIT_BATCH_FAILED
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_outcome_codes() {
        let cases = vec![
            (UploadOutcome::Succeeded, 0),
            (UploadOutcome::AuthFailed, 401),
            (UploadOutcome::RemoteRejected(500), 500),
            (UploadOutcome::RemoteRejected(413), 413),
            (UploadOutcome::ConnectTimeout, 1000),
            (UploadOutcome::LocalIo("denied".to_string()), 1001),
            (UploadOutcome::Transport("reset".to_string()), 1002),
        ];

        for (outcome, expected) in cases {
            assert_eq!(RunStatus::File(outcome.clone()).code(), expected, "{:?}", outcome);
        }
    }

    #[test]
    fn test_remote_status_never_truncates_to_success() {
        for status in [256u16, 512, 768] {
            let code = RunStatus::File(UploadOutcome::RemoteRejected(status)).code();
            assert_eq!(code, EXIT_BATCH_FAILED, "status = {}", status);
            assert_ne!(code & 0xff, 0);
        }
        assert_eq!(RunStatus::File(UploadOutcome::RemoteRejected(257)).code(), 257);
    }

    #[test]
    fn test_directory_codes() {
        let mut ok = BatchResult::new(2);
        ok.record(&UploadOutcome::Succeeded);
        ok.record(&UploadOutcome::Succeeded);
        assert_eq!(RunStatus::Directory(ok).code(), EXIT_SUCCESS);

        let mut partial = BatchResult::new(2);
        partial.record(&UploadOutcome::Succeeded);
        partial.record(&UploadOutcome::RemoteRejected(500));
        assert_eq!(RunStatus::Directory(partial).code(), EXIT_BATCH_FAILED);

        let mut auth = BatchResult::new(2);
        auth.record(&UploadOutcome::AuthFailed);
        auth.record(&UploadOutcome::ConnectTimeout);
        assert_eq!(RunStatus::Directory(auth).code(), EXIT_AUTH_FAILED);
    }

    #[test]
    fn test_empty_directory_is_success() {
        let status = RunStatus::Directory(BatchResult::new(0));
        assert!(status.is_success());
    }

    #[test]
    fn test_invalid_path() {
        assert_eq!(RunStatus::InvalidPath.code(), 255);
        assert!(!RunStatus::InvalidPath.is_success());
    }
}
