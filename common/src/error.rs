//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// ファイル検証エラーは送信前に、`UploadFailed` は送信後に発生する。
/// いずれも致命的ではなく、画面上の通知で回復する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// 通信失敗・非2xx・非JSONをまとめたもの（詳細はログ用）
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("An upload is already in progress")]
    Busy,
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::UploadFailed(format!("response is not JSON: {}", e))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
