//! Candidate classification: which sites may give stock and which need it.
//!
//! Classification is scoped to one (Article, OM) group. Candidates carry their
//! own mutable quantity counters; they live for one group's matching pass only.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use restock_core::ValueObject;

use crate::config::TransferConfig;
use crate::stock::{GroupKey, RpType, StockRow};

/// Matching priority. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    First,
    Second,
}

/// A site that can give stock away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCandidate {
    pub site: String,
    /// Remaining supply; decremented while matching.
    pub transferable_qty: i64,
    pub priority: Priority,
    /// Position of the originating row within its group.
    pub row: usize,
}

impl ValueObject for SourceCandidate {}

/// A site that should receive stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationCandidate {
    pub site: String,
    /// Remaining demand; decremented while matching.
    pub needed_qty: i64,
    pub priority: Priority,
}

impl ValueObject for DestinationCandidate {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub sources: Vec<SourceCandidate>,
    pub destinations: Vec<DestinationCandidate>,
}

impl CandidateSet {
    /// Matching only makes sense when both sides have at least one candidate.
    pub fn is_matchable(&self) -> bool {
        !self.sources.is_empty() && !self.destinations.is_empty()
    }
}

/// Group rows by (Article, OM), ascending by key, rows kept in input order.
///
/// Rows without an article code cannot belong to any group and are left out.
pub fn group_rows(rows: &[StockRow]) -> BTreeMap<GroupKey, Vec<&StockRow>> {
    let mut groups: BTreeMap<GroupKey, Vec<&StockRow>> = BTreeMap::new();
    let mut skipped = 0usize;

    for row in rows {
        if row.article.is_empty() {
            skipped += 1;
            continue;
        }
        groups.entry(row.group_key()).or_default().push(row);
    }

    if skipped > 0 {
        tracing::warn!(skipped, "rows without an article code were left out of matching");
    }

    groups
}

/// Build the source and destination candidate lists for one group.
///
/// Sources: every `ND` row at priority 1 (its whole net stock), then `RF` rows
/// holding more than safety stock at priority 2, excluding the group's top
/// seller(s). Destinations: `RF` rows that are out of stock but selling at
/// priority 1, then `RF` top sellers below safety stock at priority 2.
pub fn classify_group(group: &[&StockRow], config: &TransferConfig) -> CandidateSet {
    let max_effective_sold = group.iter().map(|r| r.effective_sold_qty).max().unwrap_or(0);

    let mut sources = Vec::new();

    for (idx, row) in group.iter().enumerate() {
        if row.rp_type == RpType::Nd {
            sources.push(SourceCandidate {
                site: row.site.clone(),
                transferable_qty: row.net_stock,
                priority: Priority::First,
                row: idx,
            });
        }
    }

    for (idx, row) in group.iter().enumerate() {
        let is_surplus = row.rp_type == RpType::Rf && row.available() > row.safety_stock;
        if !is_surplus || row.effective_sold_qty >= max_effective_sold {
            continue;
        }
        let surplus = row.available() - row.safety_stock;
        let limit = config.rf_transfer_limit(row.available());
        sources.push(SourceCandidate {
            site: row.site.clone(),
            transferable_qty: surplus.min(limit),
            priority: Priority::Second,
            row: idx,
        });
    }

    let mut destinations = Vec::new();
    let mut urgent_rows = HashSet::new();

    for (idx, row) in group.iter().enumerate() {
        if row.rp_type == RpType::Rf && row.net_stock == 0 && row.effective_sold_qty > 0 {
            urgent_rows.insert(idx);
            destinations.push(DestinationCandidate {
                site: row.site.clone(),
                needed_qty: row.safety_stock,
                priority: Priority::First,
            });
        }
    }

    for (idx, row) in group.iter().enumerate() {
        let is_short = row.rp_type == RpType::Rf && row.available() < row.safety_stock;
        if !is_short || urgent_rows.contains(&idx) || row.effective_sold_qty != max_effective_sold {
            continue;
        }
        destinations.push(DestinationCandidate {
            site: row.site.clone(),
            needed_qty: row.safety_stock - row.available(),
            priority: Priority::Second,
        });
    }

    CandidateSet {
        sources,
        destinations,
    }
}
