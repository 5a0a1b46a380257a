//! Report artifact: two-sheet workbook with recommendations and a summary dashboard.
//!
//! [`ReportGrid`] is the pure cell layout; [`render_xlsx`] turns it into bytes.

use chrono::NaiveDate;

use restock_transfer::{SummaryReport, TransferPlan, TransferRecommendation};

mod xlsx;

pub use xlsx::{ReportError, render_xlsx};

pub const RECOMMENDATIONS_SHEET: &str = "Transfer Recommendations";
pub const SUMMARY_SHEET: &str = "Summary Dashboard";

pub const RECOMMENDATION_HEADERS: [&str; 7] = [
    "Article",
    "Product Desc",
    "OM",
    "Transfer Site",
    "Receive Site",
    "Transfer Qty",
    "Notes",
];

/// Blank rows between the totals block and the first table.
const TOTALS_GAP: usize = 2;
/// Blank rows between consecutive summary tables.
const TABLE_GAP: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Blank,
}

impl Cell {
    /// Empty strings become blank cells.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() { Cell::Blank } else { Cell::Text(s) }
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
    /// Rows rendered as table headers.
    pub header_rows: Vec<usize>,
}

impl Sheet {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
            header_rows: Vec::new(),
        }
    }

    fn header(&mut self, names: &[&str]) {
        self.header_rows.push(self.rows.len());
        self.rows.push(names.iter().map(|n| Cell::text(*n)).collect());
    }

    fn blank_rows(&mut self, n: usize) {
        self.rows.extend(std::iter::repeat_n(Vec::new(), n));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGrid {
    pub recommendations: Sheet,
    pub summary: Sheet,
}

impl ReportGrid {
    pub fn from_plan(plan: &TransferPlan) -> Self {
        Self {
            recommendations: recommendations_sheet(&plan.recommendations),
            summary: summary_sheet(&plan.summary),
        }
    }

    pub fn sheets(&self) -> [&Sheet; 2] {
        [&self.recommendations, &self.summary]
    }
}

/// Download name for a report generated on `date`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("transfer_recommendations_{}.xlsx", date.format("%Y%m%d"))
}

fn recommendations_sheet(recommendations: &[TransferRecommendation]) -> Sheet {
    let mut sheet = Sheet::new(RECOMMENDATIONS_SHEET);
    sheet.header(&RECOMMENDATION_HEADERS);

    for rec in recommendations {
        sheet.rows.push(vec![
            Cell::text(&rec.article),
            Cell::text(&rec.product_desc),
            Cell::text(&rec.om),
            Cell::text(&rec.transfer_site),
            Cell::text(&rec.receive_site),
            Cell::from(rec.transfer_qty),
            Cell::text(&rec.notes),
        ]);
    }

    sheet
}

fn summary_sheet(summary: &SummaryReport) -> Sheet {
    let mut sheet = Sheet::new(SUMMARY_SHEET);

    sheet.rows.push(vec![
        Cell::text("Total recommendation count"),
        Cell::from(summary.total_recommendations),
    ]);
    sheet.rows.push(vec![
        Cell::text("Total transfer quantity"),
        Cell::from(summary.total_transfer_qty),
    ]);
    sheet.blank_rows(TOTALS_GAP);

    sheet.header(&["Article", "total_transfer_qty_per_article", "om_count"]);
    for a in &summary.by_article {
        sheet.rows.push(vec![
            Cell::text(&a.article),
            Cell::from(a.total_transfer_qty),
            Cell::from(a.om_count),
        ]);
    }
    sheet.blank_rows(TABLE_GAP);

    sheet.header(&["OM", "total_transfer_qty_per_om", "article_count"]);
    for o in &summary.by_om {
        sheet.rows.push(vec![
            Cell::text(&o.om),
            Cell::from(o.total_transfer_qty),
            Cell::from(o.article_count),
        ]);
    }
    sheet.blank_rows(TABLE_GAP);

    sheet.header(&["RP Type", "recommendation_count", "total_qty"]);
    for t in &summary.by_rp_type {
        sheet.rows.push(vec![
            Cell::text(&t.rp_type),
            Cell::from(t.recommendation_count),
            Cell::from(t.total_qty),
        ]);
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::RunId;
    use restock_transfer::{ArticleSummary, OmSummary, RpTypeSummary};

    fn sample_plan() -> TransferPlan {
        let rec = TransferRecommendation {
            article: "1001".into(),
            product_desc: String::new(),
            om: "OM1".into(),
            transfer_site: "A".into(),
            receive_site: "B".into(),
            transfer_qty: 30,
            notes: String::new(),
        };
        TransferPlan {
            run_id: RunId::new(),
            rows: Vec::new(),
            recommendations: vec![rec],
            summary: SummaryReport {
                total_recommendations: 1,
                total_transfer_qty: 30,
                by_article: vec![ArticleSummary {
                    article: "1001".into(),
                    total_transfer_qty: 30,
                    om_count: 1,
                }],
                by_om: vec![
                    OmSummary { om: "OM1".into(), total_transfer_qty: 20, article_count: 1 },
                    OmSummary { om: "OM2".into(), total_transfer_qty: 10, article_count: 1 },
                ],
                by_rp_type: vec![RpTypeSummary {
                    rp_type: "ND".into(),
                    recommendation_count: 1,
                    total_qty: 30,
                }],
            },
        }
    }

    #[test]
    fn recommendations_sheet_has_header_then_one_row_per_recommendation() {
        let grid = ReportGrid::from_plan(&sample_plan());
        let sheet = &grid.recommendations;

        assert_eq!(sheet.name, "Transfer Recommendations");
        assert_eq!(sheet.header_rows, vec![0]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][5], Cell::text("Transfer Qty"));
        assert_eq!(
            sheet.rows[1],
            vec![
                Cell::text("1001"),
                Cell::Blank,
                Cell::text("OM1"),
                Cell::text("A"),
                Cell::text("B"),
                Cell::Int(30),
                Cell::Blank,
            ]
        );
    }

    #[test]
    fn summary_sheet_layout_leaves_gaps_between_tables() {
        let grid = ReportGrid::from_plan(&sample_plan());
        let sheet = &grid.summary;

        assert_eq!(sheet.rows[0], vec![Cell::text("Total recommendation count"), Cell::Int(1)]);
        assert_eq!(sheet.rows[1], vec![Cell::text("Total transfer quantity"), Cell::Int(30)]);
        assert!(sheet.rows[2].is_empty() && sheet.rows[3].is_empty());

        // article header at 4, one article row, gap, OM header, two OM rows, gap, RP header
        assert_eq!(sheet.header_rows, vec![4, 7, 11]);
        assert_eq!(sheet.rows[4][0], Cell::text("Article"));
        assert!(sheet.rows[6].is_empty());
        assert_eq!(sheet.rows[7][0], Cell::text("OM"));
        assert!(sheet.rows[10].is_empty());
        assert_eq!(sheet.rows[11][0], Cell::text("RP Type"));
        assert_eq!(sheet.rows[12], vec![Cell::text("ND"), Cell::Int(1), Cell::Int(30)]);
    }

    #[test]
    fn file_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "transfer_recommendations_20260307.xlsx");
    }
}
