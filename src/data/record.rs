//! Security record wire model.

use serde::{Deserialize, Deserializer, Serialize};

/// Sector label substituted for records with no sector data.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// One row of the precomputed dataset.
///
/// Field names follow the column names of the JSON document the external
/// computation script writes. A missing or null `Sector` is normalized to
/// [`UNKNOWN_SECTOR`] during deserialization, so every in-memory record
/// carries a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    #[serde(rename = "Sharpe Ratio")]
    pub sharpe_ratio: f64,

    #[serde(rename = "Beta")]
    pub beta: f64,

    #[serde(rename = "Annual Return (%)")]
    pub annual_return_pct: f64,

    #[serde(
        rename = "Sector",
        default = "unknown_sector",
        deserialize_with = "sector_or_unknown"
    )]
    pub sector: String,
}

fn unknown_sector() -> String {
    UNKNOWN_SECTOR.to_string()
}

fn sector_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let sector = Option::<String>::deserialize(deserializer)?;
    Ok(sector.unwrap_or_else(unknown_sector))
}

/// The ordered, deduplicated sector list of a dataset, in first-appearance
/// order. This is what the sector multi-select offers, and defaults to, on
/// every render pass.
pub fn sector_options(records: &[SecurityRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        if !options.iter().any(|s| s == &record.sector) {
            options.push(record.sector.clone());
        }
    }
    options
}
