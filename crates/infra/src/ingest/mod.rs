//! Input table ingestion.
//!
//! The first non-empty row is the header. Columns are located by name (trimmed,
//! case-sensitive); extra columns are ignored and blank rows are skipped. Cell
//! contents are passed on untouched: coercion is the normalizer's job.

use thiserror::Error;

use restock_transfer::{CellValue, RawStockRow};

mod csv_table;
mod workbook;

pub use csv_table::read_csv;
pub use workbook::read_workbook;

pub const COL_ARTICLE: &str = "Article";
pub const COL_PRODUCT_DESC: &str = "Product Desc";
pub const COL_OM: &str = "OM";
pub const COL_SITE: &str = "Site";
pub const COL_RP_TYPE: &str = "RP Type";
pub const COL_NET_STOCK: &str = "SaSa Net Stock";
pub const COL_PENDING_RECEIVED: &str = "Pending Received";
pub const COL_SAFETY_STOCK: &str = "Safety Stock";
pub const COL_LAST_MONTH_SOLD: &str = "Last Month Sold Qty";
pub const COL_MTD_SOLD: &str = "MTD Sold Qty";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unreadable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("unreadable csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook contains no worksheet")]
    NoWorksheet,

    #[error("table has no header row")]
    NoHeader,

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

/// How to decode an uploaded file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    /// Anything calamine recognizes (xlsx, xlsm, xls, ods).
    Workbook,
}

impl SourceFormat {
    pub fn from_file_name(name: &str) -> Self {
        if name.trim().to_ascii_lowercase().ends_with(".csv") {
            SourceFormat::Csv
        } else {
            SourceFormat::Workbook
        }
    }
}

/// Decode a whole input table.
pub fn read_table(bytes: &[u8], format: SourceFormat) -> Result<Vec<RawStockRow>, IngestError> {
    let rows = match format {
        SourceFormat::Csv => read_csv(bytes)?,
        SourceFormat::Workbook => read_workbook(bytes)?,
    };
    tracing::debug!(rows = rows.len(), ?format, "input table decoded");
    Ok(rows)
}

/// Column positions resolved from a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    article: usize,
    product_desc: Option<usize>,
    om: usize,
    site: usize,
    rp_type: usize,
    net_stock: usize,
    pending_received: usize,
    safety_stock: usize,
    last_month_sold_qty: usize,
    mtd_sold_qty: usize,
}

impl ColumnMap {
    pub(crate) fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self, IngestError> {
        let find = |name: &str| headers.iter().position(|h| h.as_ref().trim() == name);
        let require = |name: &'static str| find(name).ok_or(IngestError::MissingColumn(name));

        Ok(Self {
            article: require(COL_ARTICLE)?,
            product_desc: find(COL_PRODUCT_DESC),
            om: require(COL_OM)?,
            site: require(COL_SITE)?,
            rp_type: require(COL_RP_TYPE)?,
            net_stock: require(COL_NET_STOCK)?,
            pending_received: require(COL_PENDING_RECEIVED)?,
            safety_stock: require(COL_SAFETY_STOCK)?,
            last_month_sold_qty: require(COL_LAST_MONTH_SOLD)?,
            mtd_sold_qty: require(COL_MTD_SOLD)?,
        })
    }

    /// Build a raw row from one record; short records read as empty cells.
    pub(crate) fn row(&self, cells: &[CellValue]) -> RawStockRow {
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();

        RawStockRow {
            article: cell(self.article),
            product_desc: self.product_desc.map(cell),
            om: cell(self.om),
            site: cell(self.site),
            rp_type: cell(self.rp_type),
            net_stock: cell(self.net_stock),
            pending_received: cell(self.pending_received),
            safety_stock: cell(self.safety_stock),
            last_month_sold_qty: cell(self.last_month_sold_qty),
            mtd_sold_qty: cell(self.mtd_sold_qty),
        }
    }
}

pub(crate) fn is_blank(cells: &[CellValue]) -> bool {
    cells.iter().all(CellValue::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEADERS: [&str; 11] = [
        "Article",
        "Product Desc",
        "OM",
        "Site",
        "RP Type",
        "SaSa Net Stock",
        "Pending Received",
        "Safety Stock",
        "Last Month Sold Qty",
        "MTD Sold Qty",
        "Extra",
    ];

    #[test]
    fn resolves_columns_in_any_order() {
        let mut headers: Vec<&str> = HEADERS.to_vec();
        headers.reverse();
        let map = ColumnMap::from_headers(&headers).unwrap();
        assert_eq!(map.article, 10);
        assert_eq!(map.product_desc, Some(9));
        assert_eq!(map.mtd_sold_qty, 1);
    }

    #[test]
    fn product_desc_is_optional() {
        let headers: Vec<&str> = HEADERS.iter().copied().filter(|h| *h != "Product Desc").collect();
        let map = ColumnMap::from_headers(&headers).unwrap();
        assert_eq!(map.product_desc, None);
        assert_eq!(map.row(&[]).product_desc, None);
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let headers: Vec<&str> = HEADERS.iter().copied().filter(|h| *h != "Safety Stock").collect();
        let err = ColumnMap::from_headers(&headers).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn("Safety Stock")));
    }

    #[test]
    fn header_names_are_trimmed() {
        let headers: Vec<String> = HEADERS.iter().map(|h| format!(" {h} ")).collect();
        assert!(ColumnMap::from_headers(&headers).is_ok());
    }

    #[test]
    fn format_follows_file_extension() {
        assert_eq!(SourceFormat::from_file_name("stock.CSV"), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_file_name("stock.xlsx"), SourceFormat::Workbook);
        assert_eq!(SourceFormat::from_file_name("stock"), SourceFormat::Workbook);
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

        #[test]
        fn column_order_does_not_change_decoded_rows(
            order in Just((0..HEADERS.len()).collect::<Vec<_>>()).prop_shuffle(),
            qty in 0i64..1_000,
        ) {
            let values = ["1001", "Hand cream", "OM1", "A", "RF", "5", "1", "3", "2", "0", "x"];
            let values: Vec<String> = values
                .iter()
                .enumerate()
                .map(|(i, v)| if i == 5 { qty.to_string() } else { v.to_string() })
                .collect();

            let straight = format!("{}\n{}\n", HEADERS.join(","), values.join(","));
            let shuffled = format!(
                "{}\n{}\n",
                order.iter().map(|&i| HEADERS[i]).collect::<Vec<_>>().join(","),
                order.iter().map(|&i| values[i].as_str()).collect::<Vec<_>>().join(","),
            );

            let a = read_table(straight.as_bytes(), SourceFormat::Csv).unwrap();
            let b = read_table(shuffled.as_bytes(), SourceFormat::Csv).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
