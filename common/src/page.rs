//! 画面の状態遷移
//!
//! ```text
//! Idle ──select──▶ FileSelected ──submit──▶ Loading ──ok──▶ ResultShown
//!                      ▲   ▲                   │                │
//!                      │   └──────err──────────┘                │
//!                      └───────────select───────────────────────┘
//! ```
//!
//! ResultShown からの submit は Loading に戻る（同じファイルを再送できる）。
//! Loading を抜ける手段は `finish` だけ。

use crate::config::UploadConfig;
use crate::error::{Error, Result};
use crate::file::{accept, AcceptedFile, FileMeta};
use crate::notify::Notification;
use crate::record::BillRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Loading,
    ResultShown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Page {
    #[default]
    Idle,
    FileSelected(AcceptedFile),
    Loading(AcceptedFile),
    ResultShown(AcceptedFile, BillRecord),
}

impl Page {
    pub fn phase(&self) -> Phase {
        match self {
            Page::Idle => Phase::Idle,
            Page::FileSelected(_) => Phase::FileSelected,
            Page::Loading(_) => Phase::Loading,
            Page::ResultShown(..) => Phase::ResultShown,
        }
    }

    /// ファイルを選択する
    ///
    /// 検証に通れば FileSelected へ（表示中の結果は破棄）。
    /// 失敗時は状態を変えない。
    pub fn select(&mut self, meta: FileMeta, config: &UploadConfig) -> Result<()> {
        if self.is_loading() {
            return Err(Error::Busy);
        }
        let file = accept(meta, config)?;
        *self = Page::FileSelected(file);
        Ok(())
    }

    /// 送信を開始する
    ///
    /// 送るべきファイルを返す。Idle / Loading では何もしない。
    pub fn submit(&mut self) -> Option<AcceptedFile> {
        let file = match self {
            Page::FileSelected(file) | Page::ResultShown(file, _) => file.clone(),
            Page::Idle | Page::Loading(_) => return None,
        };
        *self = Page::Loading(file.clone());
        Some(file)
    }

    /// 送信結果を反映する
    ///
    /// 成功なら ResultShown、失敗なら FileSelected に戻す。
    /// Loading 以外で呼ばれた場合は無視して `None`。
    pub fn finish(&mut self, outcome: Result<BillRecord>) -> Option<Notification> {
        let Page::Loading(file) = self else {
            return None;
        };
        let file = file.clone();

        match outcome {
            Ok(record) => {
                *self = Page::ResultShown(file, record);
                Some(Notification::analyzed())
            }
            Err(error) => {
                *self = Page::FileSelected(file);
                Notification::from_error(&error)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Page::Loading(_))
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, Page::FileSelected(_) | Page::ResultShown(..))
    }

    pub fn selected(&self) -> Option<&AcceptedFile> {
        match self {
            Page::Idle => None,
            Page::FileSelected(file) | Page::Loading(file) | Page::ResultShown(file, _) => Some(file),
        }
    }

    pub fn result(&self) -> Option<&BillRecord> {
        match self {
            Page::ResultShown(_, record) => Some(record),
            _ => None,
        }
    }
}
