//! Summary aggregation over all recommendations of a run.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use restock_core::ValueObject;

use crate::matcher::TransferRecommendation;
use crate::stock::StockRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub article: String,
    pub total_transfer_qty: i64,
    /// Distinct OM territories the article moves in.
    pub om_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmSummary {
    pub om: String,
    pub total_transfer_qty: i64,
    /// Distinct articles moved within the territory.
    pub article_count: usize,
}

/// Recommendations bucketed by the RP type of the sending site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpTypeSummary {
    pub rp_type: String,
    pub recommendation_count: usize,
    pub total_qty: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_recommendations: usize,
    pub total_transfer_qty: i64,
    /// Ascending by article.
    pub by_article: Vec<ArticleSummary>,
    /// Ascending by OM.
    pub by_om: Vec<OmSummary>,
    /// Ascending by RP type.
    pub by_rp_type: Vec<RpTypeSummary>,
}

impl ValueObject for SummaryReport {}

/// Reduce recommendations into totals and per-article / per-OM / per-RP-type tables.
///
/// `rows` is the normalized table; the sending site's RP type is looked up on the
/// row with the same article, OM and site.
pub fn summarize(recommendations: &[TransferRecommendation], rows: &[StockRow]) -> SummaryReport {
    let mut rp_types: HashMap<(&str, &str, &str), &StockRow> = HashMap::new();
    for row in rows {
        rp_types
            .entry((row.article.as_str(), row.om.as_str(), row.site.as_str()))
            .or_insert(row);
    }

    let mut by_article: BTreeMap<&str, (i64, BTreeSet<&str>)> = BTreeMap::new();
    let mut by_om: BTreeMap<&str, (i64, BTreeSet<&str>)> = BTreeMap::new();
    let mut by_rp_type: BTreeMap<String, (usize, i64)> = BTreeMap::new();

    for rec in recommendations {
        let article = by_article.entry(rec.article.as_str()).or_default();
        article.0 += rec.transfer_qty;
        article.1.insert(rec.om.as_str());

        let om = by_om.entry(rec.om.as_str()).or_default();
        om.0 += rec.transfer_qty;
        om.1.insert(rec.article.as_str());

        let key = (rec.article.as_str(), rec.om.as_str(), rec.transfer_site.as_str());
        match rp_types.get(&key) {
            Some(row) => {
                let bucket = by_rp_type.entry(row.rp_type.to_string()).or_default();
                bucket.0 += 1;
                bucket.1 += rec.transfer_qty;
            }
            None => tracing::debug!(
                article = %rec.article,
                site = %rec.transfer_site,
                "no source row for recommendation; left out of the RP type summary"
            ),
        }
    }

    SummaryReport {
        total_recommendations: recommendations.len(),
        total_transfer_qty: recommendations.iter().map(|r| r.transfer_qty).sum(),
        by_article: by_article
            .into_iter()
            .map(|(article, (qty, oms))| ArticleSummary {
                article: article.to_string(),
                total_transfer_qty: qty,
                om_count: oms.len(),
            })
            .collect(),
        by_om: by_om
            .into_iter()
            .map(|(om, (qty, articles))| OmSummary {
                om: om.to_string(),
                total_transfer_qty: qty,
                article_count: articles.len(),
            })
            .collect(),
        by_rp_type: by_rp_type
            .into_iter()
            .map(|(rp_type, (count, qty))| RpTypeSummary {
                rp_type,
                recommendation_count: count,
                total_qty: qty,
            })
            .collect(),
    }
}
