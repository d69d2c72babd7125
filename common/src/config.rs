//! アップロード設定
//!
//! 永続化も環境変数もない。`Default` が本番値そのもの。

use serde::{Deserialize, Serialize};

/// 請求書解析Webhook
pub const DEFAULT_ENDPOINT: &str = "https://muhammadowais12.app.n8n.cloud/webhook-test/bill";

/// multipartのフィールド名
pub const DEFAULT_FIELD_NAME: &str = "billFile";

/// 10 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_EXTENSIONS: &str = ".jpg,.jpeg,.png,.pdf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    pub endpoint: String,
    pub field_name: String,
    pub max_file_size: u64,
    pub accepted_types: Vec<String>,
    /// 通知の表示時間
    pub toast_duration_ms: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            field_name: DEFAULT_FIELD_NAME.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            accepted_types: vec![
                "image/jpeg".into(),
                "image/png".into(),
                "application/pdf".into(),
            ],
            toast_duration_ms: 5000,
        }
    }
}

impl UploadConfig {
    pub fn accepts_type(&self, mime: &str) -> bool {
        self.accepted_types.iter().any(|t| t == mime)
    }
}
