//! Effective demand: the single sales signal used by every later stage.

use crate::stock::StockRow;

/// Last month's sales when there were any, otherwise month-to-date sales.
///
/// There is no further fallback: zero in both columns means zero demand.
pub fn effective_sold_qty(last_month_sold_qty: i64, mtd_sold_qty: i64) -> i64 {
    if last_month_sold_qty > 0 {
        last_month_sold_qty
    } else {
        mtd_sold_qty
    }
}

pub fn derive_effective_demand(rows: &mut [StockRow]) {
    for row in rows {
        row.effective_sold_qty = effective_sold_qty(row.last_month_sold_qty, row.mtd_sold_qty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_last_month() {
        assert_eq!(effective_sold_qty(10, 3), 10);
    }

    #[test]
    fn falls_back_to_month_to_date() {
        assert_eq!(effective_sold_qty(0, 3), 3);
        assert_eq!(effective_sold_qty(0, 0), 0);
    }
}
