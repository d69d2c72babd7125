//! 画面通知（トースト）

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyLevel::Success => "success",
            NotifyLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    /// 解析成功
    pub fn analyzed() -> Self {
        Self {
            level: NotifyLevel::Success,
            title: "Success! ✨",
            description: "Your bill has been analyzed successfully.",
        }
    }

    /// エラーから通知文を作る。`Busy` は通知しない
    pub fn from_error(error: &Error) -> Option<Self> {
        let (title, description) = match error {
            Error::InvalidFileType(_) => ("Invalid file type", "Please upload a JPG, PNG, or PDF file."),
            Error::FileTooLarge { .. } => ("File too large", "Please upload a file smaller than 10MB."),
            Error::UploadFailed(_) => ("Error", "Failed to process your bill. Please try again."),
            Error::Busy => return None,
        };
        Some(Self {
            level: NotifyLevel::Error,
            title,
            description,
        })
    }
}
