use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult};

const LIMIT_SNAP: f64 = 1e9;

/// Planner configuration.
///
/// `rf_surplus_cap_fraction` limits how much an RF site with surplus may give
/// away: at most this fraction of its on-hand plus pending stock, rounded down.
/// `0.2` is the default; `1.0` removes the limit so the whole surplus above
/// safety stock is transferable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferConfig {
    rf_surplus_cap_fraction: f64,
}

impl TransferConfig {
    pub const DEFAULT_RF_SURPLUS_CAP_FRACTION: f64 = 0.2;

    pub fn new() -> Self {
        Self {
            rf_surplus_cap_fraction: Self::DEFAULT_RF_SURPLUS_CAP_FRACTION,
        }
    }

    /// Config with no RF surplus limit.
    pub fn uncapped() -> Self {
        Self {
            rf_surplus_cap_fraction: 1.0,
        }
    }

    pub fn with_rf_surplus_cap_fraction(mut self, fraction: f64) -> DomainResult<Self> {
        if !(fraction.is_finite() && (0.0..=1.0).contains(&fraction)) {
            return Err(DomainError::validation(format!(
                "rf_surplus_cap_fraction must be a finite number within [0, 1] (got {fraction})"
            )));
        }
        self.rf_surplus_cap_fraction = fraction;
        Ok(self)
    }

    pub fn rf_surplus_cap_fraction(&self) -> f64 {
        self.rf_surplus_cap_fraction
    }

    /// Transfer limit for an RF source holding `available` units (stock + pending).
    ///
    /// The product is snapped to 9 decimal places before flooring so that binary
    /// representation error (`0.29 * 100 = 28.999...`) does not cost a unit.
    pub fn rf_transfer_limit(&self, available: i64) -> i64 {
        let product = available as f64 * self.rf_surplus_cap_fraction;
        ((product * LIMIT_SNAP).round() / LIMIT_SNAP).floor() as i64
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self::new()
    }
}
