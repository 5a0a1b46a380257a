//! Shared fixtures and generators for unit tests.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::demand::derive_effective_demand;
use crate::normalize::normalize_row;
use crate::stock::{CellValue, RawStockRow, StockRow};

#[allow(clippy::too_many_arguments)]
pub(crate) fn raw_row(
    article: &str,
    om: &str,
    site: &str,
    rp_type: &str,
    net_stock: i64,
    pending: i64,
    safety: i64,
    last_month: i64,
    mtd: i64,
) -> RawStockRow {
    RawStockRow {
        article: article.into(),
        product_desc: Some(CellValue::text(format!("{article} desc"))),
        om: om.into(),
        site: site.into(),
        rp_type: rp_type.into(),
        net_stock: net_stock.into(),
        pending_received: pending.into(),
        safety_stock: safety.into(),
        last_month_sold_qty: last_month.into(),
        mtd_sold_qty: mtd.into(),
    }
}

/// A normalized row with effective demand already derived.
#[allow(clippy::too_many_arguments)]
pub(crate) fn stock_row(
    article: &str,
    om: &str,
    site: &str,
    rp_type: &str,
    net_stock: i64,
    pending: i64,
    safety: i64,
    last_month: i64,
    mtd: i64,
) -> StockRow {
    let raw = raw_row(article, om, site, rp_type, net_stock, pending, safety, last_month, mtd);
    let mut rows = vec![normalize_row(&raw)];
    derive_effective_demand(&mut rows);
    rows.remove(0)
}

fn arb_numeric_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        3 => (-50i64..250_000).prop_map(CellValue::from),
        1 => (-50.0f64..250_000.0).prop_map(CellValue::Number),
        1 => (0i64..500).prop_map(|n| CellValue::Text(format!(" {n} "))),
        1 => "[a-z]{0,4}".prop_map(CellValue::Text),
        1 => Just(CellValue::Empty),
        1 => any::<bool>().prop_map(CellValue::Bool),
    ]
}

fn arb_text_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        4 => " ?[A-Z0-9]{1,5} ?".prop_map(CellValue::Text),
        1 => (0i64..100_000).prop_map(CellValue::from),
        1 => Just(CellValue::Empty),
    ]
}

/// Arbitrary raw row, including malformed and out-of-range cells.
pub(crate) fn arb_raw_row() -> impl Strategy<Value = RawStockRow> {
    (
        arb_text_cell(),
        proptest::option::of(arb_text_cell()),
        arb_text_cell(),
        arb_text_cell(),
        prop_oneof![Just(CellValue::text("ND")), Just(CellValue::text("RF")), arb_text_cell()],
        arb_numeric_cell(),
        arb_numeric_cell(),
        arb_numeric_cell(),
        arb_numeric_cell(),
        arb_numeric_cell(),
    )
        .prop_map(
            |(article, product_desc, om, site, rp_type, net, pending, safety, last, mtd)| RawStockRow {
                article,
                product_desc,
                om,
                site,
                rp_type,
                net_stock: net,
                pending_received: pending,
                safety_stock: safety,
                last_month_sold_qty: last,
                mtd_sold_qty: mtd,
            },
        )
}

/// A well-formed table with a few overlapping groups. Sites are unique within
/// each (Article, OM) group.
pub(crate) fn arb_table() -> impl Strategy<Value = Vec<RawStockRow>> {
    let row = (
        0usize..3,
        0usize..2,
        0usize..6,
        prop_oneof![Just("ND"), Just("RF"), Just("RF"), Just("XX")],
        0i64..60,
        0i64..20,
        0i64..50,
        0i64..30,
        0i64..30,
    );

    prop::collection::vec(row, 0..40).prop_map(|rows| {
        let mut seen = HashSet::new();
        rows.into_iter()
            .filter(|(a, o, s, ..)| seen.insert((*a, *o, *s)))
            .map(|(a, o, s, rp, net, pending, safety, last, mtd)| {
                raw_row(
                    &format!("A{a}"),
                    &format!("OM{o}"),
                    &format!("S{s}"),
                    rp,
                    net,
                    pending,
                    safety,
                    last,
                    mtd,
                )
            })
            .collect()
    })
}
