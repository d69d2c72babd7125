//! Smart Bill Checker Common Library
//!
//! Web(WASM)画面から使う型と状態遷移。ブラウザAPIには依存しない。

pub mod config;
pub mod error;
pub mod file;
pub mod layout;
pub mod notify;
pub mod page;
pub mod record;
pub mod upload;

pub use config::{UploadConfig, ACCEPT_EXTENSIONS};
pub use error::{Error, Result};
pub use file::{accept, format_size_mb, AcceptedFile, BillFileKind, FileMeta};
pub use layout::{present, ResultTile, TileGroup, TileDef, RESULT_TILES};
pub use notify::{Notification, NotifyLevel};
pub use page::{Page, Phase};
pub use record::{BillField, BillRecord};
pub use upload::{check_status, interpret_response, parse_bill_response, UPLOAD_METHOD};
