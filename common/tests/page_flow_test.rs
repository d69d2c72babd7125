//! 選択 → 送信 → 結果表示 の一連の流れ
//!
//! ブラウザ側と同じ順序で Page / interpret_response / present を呼ぶ

use bill_checker_common::{
    interpret_response, present, Error, FileMeta, NotifyLevel, Page, Phase, UploadConfig,
};

const SAMPLE: &str = r#"{"Customer Name":"A. Khan","Address":"12 Lane","Previous Reading":100,"Present Reading":150,"Units":50,"Current Bill":2500,"Payable Within Due Date":"Rs. 2500","Bill Month":"March 2024"}"#;

fn bill_jpeg() -> FileMeta {
    FileMeta::new("bill.jpg", "image/jpeg", 512 * 1024)
}

/// 正常系: サンプル本文が全ラベルでそのまま表示される
#[test]
fn test_successful_upload_displays_sample() {
    let config = UploadConfig::default();
    let mut page = Page::default();

    page.select(bill_jpeg(), &config).unwrap();
    assert_eq!(page.phase(), Phase::FileSelected);

    let file = page.submit().expect("submit should start loading");
    assert_eq!(file.name(), "bill.jpg");
    assert!(page.is_loading());

    let note = page.finish(interpret_response(true, 200, SAMPLE)).unwrap();
    assert_eq!(note.level, NotifyLevel::Success);

    let record = page.result().expect("result should be shown");
    let shown: Vec<(&str, String)> = present(record)
        .into_iter()
        .map(|t| (t.def.label, t.value))
        .collect();

    assert_eq!(
        shown,
        vec![
            ("Customer Name", "A. Khan".to_string()),
            ("Bill Month", "March 2024".to_string()),
            ("Address", "12 Lane".to_string()),
            ("Previous Reading", "100".to_string()),
            ("Present Reading", "150".to_string()),
            ("Units Consumed", "50".to_string()),
            ("Current Bill", "2500".to_string()),
            ("Payable Within Due Date", "Rs. 2500".to_string()),
        ]
    );
}

/// 非2xx: Loading を抜け、エラー通知は1件
#[test]
fn test_error_status_returns_to_file_selected() {
    let config = UploadConfig::default();
    let mut page = Page::default();
    page.select(bill_jpeg(), &config).unwrap();
    page.submit();

    let notes: Vec<_> = page
        .finish(interpret_response(false, 502, "Bad Gateway"))
        .into_iter()
        .collect();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Error");
    assert_eq!(page.phase(), Phase::FileSelected);
    assert!(page.result().is_none());
}

/// 通信失敗もHTTPエラーと同じ扱い
#[test]
fn test_network_failure_same_as_status_failure() {
    let config = UploadConfig::default();

    let mut a = Page::default();
    a.select(bill_jpeg(), &config).unwrap();
    a.submit();
    let note_a = a.finish(Err(Error::UploadFailed("TypeError: Failed to fetch".into())));

    let mut b = Page::default();
    b.select(bill_jpeg(), &config).unwrap();
    b.submit();
    let note_b = b.finish(interpret_response(false, 500, ""));

    assert_eq!(note_a, note_b);
    assert_eq!(a, b);
}

/// 同じファイルを2回送ると独立した2つの結果になる（キャッシュしない）
#[test]
fn test_same_file_twice_gives_independent_results() {
    let config = UploadConfig::default();
    let mut page = Page::default();
    page.select(bill_jpeg(), &config).unwrap();

    let first = page.submit().unwrap();
    page.finish(interpret_response(true, 200, r#"{"Units": 50}"#));
    let first_units = page.result().and_then(|r| r.units.clone());

    let second = page.submit().unwrap();
    assert!(page.result().is_none());
    page.finish(interpret_response(true, 200, r#"{"Units": 51}"#));
    let second_units = page.result().and_then(|r| r.units.clone());

    assert_eq!(first, second);
    assert_eq!(first_units.map(|n| n.to_string()).as_deref(), Some("50"));
    assert_eq!(second_units.map(|n| n.to_string()).as_deref(), Some("51"));
}

/// 成功後に新しいファイルを選ぶと結果が消える
#[test]
fn test_new_selection_after_result() {
    let config = UploadConfig::default();
    let mut page = Page::default();
    page.select(bill_jpeg(), &config).unwrap();
    page.submit();
    page.finish(interpret_response(true, 200, SAMPLE));
    assert_eq!(page.phase(), Phase::ResultShown);

    page.select(FileMeta::new("bill.pdf", "application/pdf", 1), &config)
        .unwrap();
    assert_eq!(page.phase(), Phase::FileSelected);
    assert!(page.result().is_none());
}

/// 不正ファイルはネットワークに出る前に弾かれる
#[test]
fn test_invalid_file_never_reaches_submit() {
    let config = UploadConfig::default();
    let mut page = Page::default();

    let err = page
        .select(FileMeta::new("bill.heic", "image/heic", 100), &config)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFileType(_)));
    assert!(page.submit().is_none());
}
