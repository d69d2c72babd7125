//! 請求書解析Webhook連携
//!
//! 選択されたファイルを multipart/form-data で1回だけPOSTし、
//! 返ってきたJSONを `BillRecord` にする。リトライはしない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use bill_checker_common::{interpret_response, BillRecord, Error, FileMeta, UploadConfig, UPLOAD_METHOD};

/// ブラウザの `File` からメタデータを取り出す
pub fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), file.size() as u64)
}

/// ファイルを1パートだけ持つフォームを作る
pub fn build_form_data(file: &File, field_name: &str) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(field_name, file, &file.name())?;
    Ok(form)
}

/// ステータスと本文を取得（ここでの失敗は通信失敗）
async fn post_file(file: &File, config: &UploadConfig) -> Result<(bool, u16, String), JsValue> {
    let form = build_form_data(file, &config.field_name)?;

    let opts = RequestInit::new();
    opts.set_method(UPLOAD_METHOD);
    opts.set_mode(RequestMode::Cors);
    let body: &JsValue = form.as_ref();
    opts.set_body(body);

    let request = Request::new_with_str_and_init(&config.endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.ok(), resp.status(), text.as_string().unwrap_or_default()))
}

/// 請求書をアップロードして解析結果を得る
///
/// 通信失敗・非2xx・非JSONはすべて `Error::UploadFailed`
pub async fn upload_bill(file: &File, config: &UploadConfig) -> Result<BillRecord, Error> {
    let (ok, status, body) = post_file(file, config)
        .await
        .map_err(|e| Error::UploadFailed(format!("network error: {:?}", e)))?;

    interpret_response(ok, status, &body)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str, mime: &str, content: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_file_meta_reads_browser_metadata() {
        let file = make_file("bill.pdf", "application/pdf", "%PDF-1.4");
        let meta = file_meta(&file);
        assert_eq!(meta.name, "bill.pdf");
        assert_eq!(meta.mime, "application/pdf");
        assert_eq!(meta.size, 8);
    }

    #[wasm_bindgen_test]
    fn test_form_data_has_single_bill_file_part() {
        let file = make_file("bill.png", "image/png", "png-bytes");
        let form = build_form_data(&file, "billFile").unwrap();

        assert!(form.has("billFile"));
        assert!(!form.has("file"));

        let part: File = form.get("billFile").dyn_into().unwrap();
        assert_eq!(part.name(), "bill.png");
        assert_eq!(part.type_(), "image/png");
    }
}
