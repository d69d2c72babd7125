//! 請求書解析結果の型定義
//!
//! Webhookが返すJSONオブジェクトをそのまま受ける。キー名は空白入りの
//! 固定文字列。欠落・null・型違いのフィールドは `None` として扱い、
//! エラーにはしない。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// 解析結果の8フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillField {
    CustomerName,
    Address,
    PreviousReading,
    PresentReading,
    Units,
    CurrentBill,
    PayableWithinDueDate,
    BillMonth,
}

impl BillField {
    pub const ALL: [BillField; 8] = [
        BillField::CustomerName,
        BillField::Address,
        BillField::PreviousReading,
        BillField::PresentReading,
        BillField::Units,
        BillField::CurrentBill,
        BillField::PayableWithinDueDate,
        BillField::BillMonth,
    ];

    /// レスポンスJSONのキー
    pub fn key(&self) -> &'static str {
        match self {
            BillField::CustomerName => "Customer Name",
            BillField::Address => "Address",
            BillField::PreviousReading => "Previous Reading",
            BillField::PresentReading => "Present Reading",
            BillField::Units => "Units",
            BillField::CurrentBill => "Current Bill",
            BillField::PayableWithinDueDate => "Payable Within Due Date",
            BillField::BillMonth => "Bill Month",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            BillField::PreviousReading
                | BillField::PresentReading
                | BillField::Units
                | BillField::CurrentBill
        )
    }
}

/// 請求書1枚分の解析結果
///
/// 数値は `Number` のまま保持し、受け取った表記（`150` / `12.5` / `1e3`）を崩さない。
/// `serde_json` の `arbitrary_precision` により、f64 に収まらない値も文字列として残る。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct BillRecord {
    #[serde(rename = "Customer Name", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "Previous Reading", skip_serializing_if = "Option::is_none")]
    pub previous_reading: Option<Number>,

    #[serde(rename = "Present Reading", skip_serializing_if = "Option::is_none")]
    pub present_reading: Option<Number>,

    #[serde(rename = "Units", skip_serializing_if = "Option::is_none")]
    pub units: Option<Number>,

    #[serde(rename = "Current Bill", skip_serializing_if = "Option::is_none")]
    pub current_bill: Option<Number>,

    /// "Rs. 2500" のような整形済み文字列
    #[serde(rename = "Payable Within Due Date", skip_serializing_if = "Option::is_none")]
    pub payable_within_due_date: Option<String>,

    #[serde(rename = "Bill Month", skip_serializing_if = "Option::is_none")]
    pub bill_month: Option<String>,
}

impl BillRecord {
    /// JSONオブジェクトから組み立てる
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let text = |field: BillField| obj.get(field.key()).and_then(Value::as_str).map(str::to_string);
        let number = |field: BillField| match obj.get(field.key()) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };

        Self {
            customer_name: text(BillField::CustomerName),
            address: text(BillField::Address),
            previous_reading: number(BillField::PreviousReading),
            present_reading: number(BillField::PresentReading),
            units: number(BillField::Units),
            current_bill: number(BillField::CurrentBill),
            payable_within_due_date: text(BillField::PayableWithinDueDate),
            bill_month: text(BillField::BillMonth),
        }
    }

    /// 表示用の文字列。欠落は空文字
    pub fn display_value(&self, field: BillField) -> String {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let number = |v: &Option<Number>| v.as_ref().map(Number::to_string).unwrap_or_default();

        match field {
            BillField::CustomerName => text(&self.customer_name),
            BillField::Address => text(&self.address),
            BillField::PreviousReading => number(&self.previous_reading),
            BillField::PresentReading => number(&self.present_reading),
            BillField::Units => number(&self.units),
            BillField::CurrentBill => number(&self.current_bill),
            BillField::PayableWithinDueDate => text(&self.payable_within_due_date),
            BillField::BillMonth => text(&self.bill_month),
        }
    }

    /// 値が入っているフィールド数
    pub fn present_count(&self) -> usize {
        BillField::ALL
            .iter()
            .filter(|f| !self.display_value(**f).is_empty())
            .count()
    }
}

impl From<Value> for BillRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(obj) => Self::from_object(&obj),
            // オブジェクト以外は全フィールド欠落として表示する
            _ => Self::default(),
        }
    }
}
