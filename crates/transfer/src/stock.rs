use serde::{Deserialize, Serialize};

use restock_core::ValueObject;

/// One cell as read from the input table, before any coercion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Render the cell as an identifier string.
    ///
    /// Integral numbers lose their fractional part so that an article code typed
    /// as `12345` in a spreadsheet stays `"12345"`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Coerce to a number. Anything unparsable becomes `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Empty => return None,
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Bool(b) => f64::from(u8::from(*b)),
        };
        n.is_finite().then_some(n)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// An input row exactly as the file reader produced it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawStockRow {
    pub article: CellValue,
    pub product_desc: Option<CellValue>,
    pub om: CellValue,
    pub site: CellValue,
    pub rp_type: CellValue,
    pub net_stock: CellValue,
    pub pending_received: CellValue,
    pub safety_stock: CellValue,
    pub last_month_sold_qty: CellValue,
    pub mtd_sold_qty: CellValue,
}

/// Replenishment type of a site for an article.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RpType {
    /// Non-distribution: clearance eligible, all stock may leave.
    Nd,
    /// Regularly replenished.
    Rf,
    Other(String),
}

impl RpType {
    pub fn parse(s: &str) -> Self {
        match s {
            "ND" => RpType::Nd,
            "RF" => RpType::Rf,
            other => RpType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RpType::Nd => "ND",
            RpType::Rf => "RF",
            RpType::Other(s) => s,
        }
    }
}

impl core::fmt::Display for RpType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized stock row. All quantities are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub article: String,
    pub product_desc: String,
    pub om: String,
    pub site: String,
    pub rp_type: RpType,
    pub net_stock: i64,
    pub pending_received: i64,
    pub safety_stock: i64,
    pub last_month_sold_qty: i64,
    pub mtd_sold_qty: i64,
    /// Human-readable flags raised during normalization.
    pub notes: String,
    /// Populated by [`crate::derive_effective_demand`].
    pub effective_sold_qty: i64,
}

impl ValueObject for StockRow {}

impl StockRow {
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            article: self.article.clone(),
            om: self.om.clone(),
        }
    }

    /// On-hand plus inbound stock.
    pub fn available(&self) -> i64 {
        self.net_stock.saturating_add(self.pending_received)
    }

    /// Convert back into raw cells (what a reader would produce for this row).
    pub fn to_raw(&self) -> RawStockRow {
        RawStockRow {
            article: CellValue::text(&self.article),
            product_desc: Some(CellValue::text(&self.product_desc)),
            om: CellValue::text(&self.om),
            site: CellValue::text(&self.site),
            rp_type: CellValue::text(self.rp_type.as_str()),
            net_stock: self.net_stock.into(),
            pending_received: self.pending_received.into(),
            safety_stock: self.safety_stock.into(),
            last_month_sold_qty: self.last_month_sold_qty.into(),
            mtd_sold_qty: self.mtd_sold_qty.into(),
        }
    }
}

/// Matching scope: transfers never cross article or OM boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey {
    pub article: String,
    pub om: String,
}

impl core::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.article, self.om)
    }
}
