//! Row normalization: coerce raw cells into typed, non-negative quantities.
//!
//! Malformed cells never fail a row. Unparsable or missing numbers become `0`,
//! missing text becomes `""`, and out-of-range sales figures are clamped with a
//! flag appended to the row's notes.

use crate::stock::{CellValue, RawStockRow, RpType, StockRow};

/// Upper bound for the two sold-quantity columns.
pub const SALES_QTY_CEILING: i64 = 100_000;

const NOTE_SEPARATOR: &str = "; ";

/// Normalize a whole table. No row is dropped.
pub fn normalize_rows(raw: &[RawStockRow]) -> Vec<StockRow> {
    raw.iter().map(normalize_row).collect()
}

pub fn normalize_row(raw: &RawStockRow) -> StockRow {
    let mut notes = Vec::new();

    let last_month_sold_qty =
        clamp_sales(coerce_int(&raw.last_month_sold_qty), "Last Month Sold Qty", &mut notes);
    let mtd_sold_qty = clamp_sales(coerce_int(&raw.mtd_sold_qty), "MTD Sold Qty", &mut notes);

    StockRow {
        article: raw.article.as_text(),
        product_desc: raw.product_desc.as_ref().map(CellValue::as_text).unwrap_or_default(),
        om: raw.om.as_text(),
        site: raw.site.as_text(),
        rp_type: RpType::parse(&raw.rp_type.as_text()),
        net_stock: coerce_int(&raw.net_stock).max(0),
        pending_received: coerce_int(&raw.pending_received).max(0),
        safety_stock: coerce_int(&raw.safety_stock).max(0),
        last_month_sold_qty,
        mtd_sold_qty,
        notes: notes.join(NOTE_SEPARATOR),
        effective_sold_qty: 0,
    }
}

/// Parse as a number and truncate toward zero; anything unparsable is `0`.
fn coerce_int(cell: &CellValue) -> i64 {
    cell.as_number().map(|n| n.trunc() as i64).unwrap_or(0)
}

fn clamp_sales(value: i64, column: &str, notes: &mut Vec<String>) -> i64 {
    if value < 0 {
        return 0;
    }
    if value > SALES_QTY_CEILING {
        tracing::debug!(column, value, "clamping out-of-range sales value");
        notes.push(format!("sales value out of range ({column})"));
        return SALES_QTY_CEILING;
    }
    value
}
