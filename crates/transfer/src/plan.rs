//! Pipeline facade: Normalize → Derive → Classify → Match → Aggregate.

use serde::{Deserialize, Serialize};

use restock_core::RunId;

use crate::classify::{classify_group, group_rows};
use crate::config::TransferConfig;
use crate::demand::derive_effective_demand;
use crate::matcher::{TransferRecommendation, match_group};
use crate::normalize::normalize_rows;
use crate::stock::{RawStockRow, StockRow};
use crate::summary::{SummaryReport, summarize};

/// A completed run with at least one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPlan {
    pub run_id: RunId,
    /// The normalized input table.
    pub rows: Vec<StockRow>,
    /// Ordered by group key, then by matching order within the group.
    pub recommendations: Vec<TransferRecommendation>,
    pub summary: SummaryReport,
}

/// Result of one planning run.
///
/// An empty plan is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    Planned(TransferPlan),
    NoRecommendations {
        run_id: RunId,
        rows: usize,
        groups: usize,
    },
}

impl PlanOutcome {
    pub fn run_id(&self) -> RunId {
        match self {
            PlanOutcome::Planned(plan) => plan.run_id,
            PlanOutcome::NoRecommendations { run_id, .. } => *run_id,
        }
    }

    pub fn plan(&self) -> Option<&TransferPlan> {
        match self {
            PlanOutcome::Planned(plan) => Some(plan),
            PlanOutcome::NoRecommendations { .. } => None,
        }
    }

    pub fn into_plan(self) -> Option<TransferPlan> {
        match self {
            PlanOutcome::Planned(plan) => Some(plan),
            PlanOutcome::NoRecommendations { .. } => None,
        }
    }
}

/// Run the whole pipeline over one input table.
///
/// Pure apart from logging: identical input and config yield identical
/// recommendations and summary (only `run_id` differs between runs).
pub fn plan_transfers(raw: &[RawStockRow], config: &TransferConfig) -> PlanOutcome {
    let run_id = RunId::new();
    let span = tracing::info_span!("plan_transfers", %run_id);
    let _enter = span.enter();

    let mut rows = normalize_rows(raw);
    derive_effective_demand(&mut rows);

    let (recommendations, group_count) = {
        let groups = group_rows(&rows);
        let group_count = groups.len();
        let mut recommendations = Vec::new();

        for (key, group) in &groups {
            let _group_span =
                tracing::debug_span!("group", article = %key.article, om = %key.om).entered();

            let candidates = classify_group(group, config);
            if !candidates.is_matchable() {
                continue;
            }
            tracing::debug!(
                sources = candidates.sources.len(),
                destinations = candidates.destinations.len(),
                "matching group"
            );
            recommendations.extend(match_group(group, candidates));
        }

        (recommendations, group_count)
    };

    if recommendations.is_empty() {
        tracing::info!(rows = rows.len(), groups = group_count, "no transfer recommendations");
        return PlanOutcome::NoRecommendations {
            run_id,
            rows: rows.len(),
            groups: group_count,
        };
    }

    let summary = summarize(&recommendations, &rows);
    tracing::info!(
        rows = rows.len(),
        groups = group_count,
        recommendations = summary.total_recommendations,
        total_qty = summary.total_transfer_qty,
        "transfer plan ready"
    );

    PlanOutcome::Planned(TransferPlan {
        run_id,
        rows,
        recommendations,
        summary,
    })
}
