//! Transfer planning engine.
//!
//! Recommends unit transfers between store sites that share an article and an
//! operations-manager (OM) territory: surplus at one site covers unmet safety
//! stock at another. Everything here is deterministic domain logic (no IO, no
//! HTTP, no spreadsheets).
//!
//! Stages, each consuming the output of the previous one:
//!
//! 1. [`normalize`]: coerce raw cells into typed [`StockRow`]s.
//! 2. [`demand`]: derive the effective demand signal.
//! 3. [`classify`]: split each (Article, OM) group into source and destination candidates.
//! 4. [`matcher`]: greedy, priority-ordered matching into [`TransferRecommendation`]s.
//! 5. [`summary`]: reduce recommendations into a [`SummaryReport`].
//!
//! [`plan_transfers`] runs the whole sequence.

pub mod classify;
pub mod config;
pub mod demand;
pub mod matcher;
pub mod normalize;
pub mod plan;
pub mod stock;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::{
    CandidateSet, DestinationCandidate, Priority, SourceCandidate, classify_group, group_rows,
};
pub use config::TransferConfig;
pub use demand::{derive_effective_demand, effective_sold_qty};
pub use matcher::{TransferRecommendation, match_group};
pub use normalize::{SALES_QTY_CEILING, normalize_row, normalize_rows};
pub use plan::{PlanOutcome, TransferPlan, plan_transfers};
pub use stock::{CellValue, GroupKey, RawStockRow, RpType, StockRow};
pub use summary::{ArticleSummary, OmSummary, RpTypeSummary, SummaryReport, summarize};
