//! ファイル受付
//!
//! ファイル選択ダイアログやドロップイベントが報告するメタデータだけで
//! 判定する。ファイル内容は読まない。

use crate::config::UploadConfig;
use crate::error::{Error, Result};

/// ブラウザが報告するファイル情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// 申告されたMIMEタイプ（空文字のこともある）
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillFileKind {
    Jpeg,
    Png,
    Pdf,
}

impl BillFileKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(BillFileKind::Jpeg),
            "image/png" => Some(BillFileKind::Png),
            "application/pdf" => Some(BillFileKind::Pdf),
            _ => None,
        }
    }
}

/// 検証を通過し送信待ちのファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFile {
    pub meta: FileMeta,
    pub kind: BillFileKind,
}

impl AcceptedFile {
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// "1.50 MB" 形式
    pub fn size_label(&self) -> String {
        format_size_mb(self.meta.size)
    }
}

/// バイト数をMiB表記（小数2桁）にする
pub fn format_size_mb(size: u64) -> String {
    format!("{:.2} MB", size as f64 / 1024.0 / 1024.0)
}

/// ファイルを検証する
///
/// 判定順: MIMEタイプ → サイズ。
/// 両方満たしたときだけ `AcceptedFile` を返す。
pub fn accept(meta: FileMeta, config: &UploadConfig) -> Result<AcceptedFile> {
    if !config.accepts_type(&meta.mime) {
        return Err(Error::InvalidFileType(meta.mime));
    }

    // BillFileKind に無いタイプは設定で許可されていても通さない
    let kind = BillFileKind::from_mime(&meta.mime)
        .ok_or_else(|| Error::InvalidFileType(meta.mime.clone()))?;

    if meta.size > config.max_file_size {
        return Err(Error::FileTooLarge {
            size: meta.size,
            limit: config.max_file_size,
        });
    }

    Ok(AcceptedFile { meta, kind })
}
