//! Greedy, single-pass matching of source candidates to destination candidates.
//!
//! Sources are visited in priority order (outer loop), destinations in priority
//! order (inner loop). Every feasible pair moves as much as both counters allow,
//! capped by the source site's original net stock. There is no backtracking:
//! the plan is deterministic for a given input order, not globally optimal.

use serde::{Deserialize, Serialize};

use restock_core::ValueObject;

use crate::classify::CandidateSet;
use crate::stock::StockRow;

/// One recommended stock movement between two sites of the same group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecommendation {
    pub article: String,
    pub product_desc: String,
    pub om: String,
    pub transfer_site: String,
    pub receive_site: String,
    pub transfer_qty: i64,
    /// Normalization flags of the sending row.
    pub notes: String,
}

impl ValueObject for TransferRecommendation {}

impl TransferRecommendation {
    pub fn is_valid(&self) -> bool {
        self.transfer_qty > 0 && self.transfer_site != self.receive_site
    }
}

/// Match one group's candidates. `group` must be the rows the candidates were
/// classified from.
pub fn match_group(group: &[&StockRow], candidates: CandidateSet) -> Vec<TransferRecommendation> {
    let CandidateSet {
        mut sources,
        mut destinations,
    } = candidates;

    if sources.is_empty() || destinations.is_empty() {
        return Vec::new();
    }

    // Stable: ties keep classification order.
    sources.sort_by_key(|s| s.priority);
    destinations.sort_by_key(|d| d.priority);

    let mut recommendations = Vec::new();

    for source in sources.iter_mut() {
        let Some(origin) = group.get(source.row) else {
            tracing::warn!(site = %source.site, row = source.row, "source row outside its group; skipped");
            continue;
        };
        let original_stock = original_net_stock(group, &source.site);

        for dest in destinations.iter_mut() {
            if source.transferable_qty <= 0 || dest.needed_qty <= 0 || source.site == dest.site {
                continue;
            }

            let qty = source.transferable_qty.min(dest.needed_qty).min(original_stock);
            if qty <= 0 {
                continue;
            }

            recommendations.push(TransferRecommendation {
                article: origin.article.clone(),
                product_desc: origin.product_desc.clone(),
                om: origin.om.clone(),
                transfer_site: source.site.clone(),
                receive_site: dest.site.clone(),
                transfer_qty: qty,
                notes: origin.notes.clone(),
            });

            source.transferable_qty -= qty;
            dest.needed_qty -= qty;
        }
    }

    retain_valid(&mut recommendations);
    recommendations
}

/// Net stock of the first row in the group for `site`.
fn original_net_stock(group: &[&StockRow], site: &str) -> i64 {
    group
        .iter()
        .find(|r| r.site == site)
        .map(|r| r.net_stock)
        .unwrap_or(0)
}

/// Final invariant check: drop anything non-positive or self-directed.
fn retain_valid(recommendations: &mut Vec<TransferRecommendation>) {
    let before = recommendations.len();
    recommendations.retain(TransferRecommendation::is_valid);
    let dropped = before - recommendations.len();
    if dropped > 0 {
        tracing::warn!(dropped, "safety filter removed invalid transfer recommendations");
    }
}
