//! Service configuration, read from the environment.

use std::net::SocketAddr;

use anyhow::{Context, anyhow};

use restock_transfer::TransferConfig;

pub const BIND_ADDR_ENV: &str = "RESTOCK_BIND_ADDR";
pub const RF_SURPLUS_CAP_ENV: &str = "RESTOCK_RF_SURPLUS_CAP";
pub const MAX_UPLOAD_BYTES_ENV: &str = "RESTOCK_MAX_UPLOAD_BYTES";

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub transfer: TransferConfig,
    /// Request body limit for uploads.
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Unset keys take their defaults; set but
    /// unparsable keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup(BIND_ADDR_ENV) {
            config.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("{BIND_ADDR_ENV}={addr:?} is not a socket address"))?;
        }

        if let Some(cap) = lookup(RF_SURPLUS_CAP_ENV) {
            let fraction: f64 = cap
                .trim()
                .parse()
                .with_context(|| format!("{RF_SURPLUS_CAP_ENV}={cap:?} is not a number"))?;
            config.transfer = TransferConfig::new()
                .with_rf_surplus_cap_fraction(fraction)
                .map_err(|e| anyhow!("{RF_SURPLUS_CAP_ENV}: {e}"))?;
        }

        if let Some(limit) = lookup(MAX_UPLOAD_BYTES_ENV) {
            config.max_upload_bytes = limit
                .trim()
                .parse()
                .with_context(|| format!("{MAX_UPLOAD_BYTES_ENV}={limit:?} is not a byte count"))?;
        }

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            transfer: TransferConfig::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
