//! Webhookレスポンスの解釈
//!
//! 通信自体はブラウザ側（web-wasm）が行う。ここではステータスと本文から
//! `BillRecord` を得るまでを扱う。失敗の原因は区別せず `UploadFailed` に畳む。

use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::BillRecord;

pub const UPLOAD_METHOD: &str = "POST";

/// HTTPステータスを検査する
///
/// `ok` はブラウザの `Response.ok`（2xx）
pub fn check_status(ok: bool, status: u16) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::UploadFailed(format!("HTTP status {}", status)))
    }
}

/// レスポンス本文をパース
///
/// JSONでなければ失敗。JSONであれば形が違っても受け入れる。
pub fn parse_bill_response(body: &str) -> Result<BillRecord> {
    let value: Value = serde_json::from_str(body)?;
    Ok(BillRecord::from(value))
}

/// ステータス検査と本文パースをまとめて行う
pub fn interpret_response(ok: bool, status: u16, body: &str) -> Result<BillRecord> {
    check_status(ok, status)?;
    parse_bill_response(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(true, 200).is_ok());
        assert!(check_status(true, 204).is_ok());
        assert_eq!(
            check_status(false, 500).unwrap_err(),
            Error::UploadFailed("HTTP status 500".into())
        );
    }

    #[test]
    fn test_parse_valid_body() {
        let record = parse_bill_response(r#"{"Units": 50, "Bill Month": "March 2024"}"#).unwrap();
        assert_eq!(record.units.map(|n| n.to_string()).as_deref(), Some("50"));
        assert_eq!(record.bill_month.as_deref(), Some("March 2024"));
    }

    #[test]
    fn test_huge_number_does_not_fail_upload() {
        let record = parse_bill_response(r#"{"Customer Name":"A. Khan","Units":1e400}"#).unwrap();
        let tiles = crate::layout::present(&record);
        assert_eq!(tiles[0].def.label, "Customer Name");
        assert_eq!(tiles[0].value, "A. Khan");
        assert_eq!(record.units.map(|n| n.to_string()).as_deref(), Some("1e400"));
    }

    #[test]
    fn test_parse_non_json_fails() {
        for body in ["", "<html>502 Bad Gateway</html>", "Workflow was started", "{\"Units\": "] {
            assert!(
                matches!(parse_bill_response(body), Err(Error::UploadFailed(_))),
                "body should fail: {:?}",
                body
            );
        }
    }

    #[test]
    fn test_error_status_ignores_body() {
        let body = r#"{"Customer Name": "A. Khan"}"#;
        assert!(matches!(
            interpret_response(false, 404, body),
            Err(Error::UploadFailed(_))
        ));
        assert!(interpret_response(true, 200, body).is_ok());
    }
}
