//! 結果表示レイアウト
//!
//! `BillRecord` の8フィールドを固定ラベル付きのタイルに並べる。
//! 計算や整合チェックは一切しない。

use crate::record::{BillField, BillRecord};

/// 表示グループ（色分けの単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileGroup {
    /// 氏名・住所・請求月
    Identity,
    /// 検針値・使用量
    Reading,
    /// 金額
    Charge,
}

impl TileGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileGroup::Identity => "identity",
            TileGroup::Reading => "reading",
            TileGroup::Charge => "charge",
        }
    }
}

/// タイル定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDef {
    pub field: BillField,
    pub label: &'static str,
    pub icon: &'static str,
    pub group: TileGroup,
    /// 2列ぶち抜き
    pub wide: bool,
    /// 支払額の強調表示
    pub highlight: bool,
}

/// 表示順
pub const RESULT_TILES: [TileDef; 8] = [
    TileDef {
        field: BillField::CustomerName,
        label: "Customer Name",
        icon: "👤",
        group: TileGroup::Identity,
        wide: false,
        highlight: false,
    },
    TileDef {
        field: BillField::BillMonth,
        label: "Bill Month",
        icon: "📅",
        group: TileGroup::Identity,
        wide: false,
        highlight: false,
    },
    TileDef {
        field: BillField::Address,
        label: "Address",
        icon: "🏠",
        group: TileGroup::Identity,
        wide: true,
        highlight: false,
    },
    TileDef {
        field: BillField::PreviousReading,
        label: "Previous Reading",
        icon: "📈",
        group: TileGroup::Reading,
        wide: false,
        highlight: false,
    },
    TileDef {
        field: BillField::PresentReading,
        label: "Present Reading",
        icon: "📈",
        group: TileGroup::Reading,
        wide: false,
        highlight: false,
    },
    TileDef {
        field: BillField::Units,
        label: "Units Consumed",
        icon: "⚡",
        group: TileGroup::Reading,
        wide: false,
        highlight: false,
    },
    TileDef {
        field: BillField::CurrentBill,
        label: "Current Bill",
        icon: "💲",
        group: TileGroup::Charge,
        wide: false,
        highlight: false,
    },
    TileDef {
        field: BillField::PayableWithinDueDate,
        label: "Payable Within Due Date",
        icon: "💲",
        group: TileGroup::Charge,
        wide: true,
        highlight: true,
    },
];

/// 描画用タイル
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTile {
    pub def: TileDef,
    pub value: String,
}

impl ResultTile {
    /// CSSクラス
    pub fn class(&self) -> String {
        let mut classes = vec!["result-tile", self.def.group.as_str()];
        if self.def.wide {
            classes.push("wide");
        }
        if self.def.highlight {
            classes.push("highlight");
        }
        classes.join(" ")
    }
}

/// レコードをタイル列に変換
pub fn present(record: &BillRecord) -> Vec<ResultTile> {
    RESULT_TILES
        .iter()
        .map(|def| ResultTile {
            def: *def,
            value: record.display_value(def.field),
        })
        .collect()
}
