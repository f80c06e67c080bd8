//! Filter predicates over the loaded dataset.

use std::collections::HashSet;

use crate::consts::screener_consts::filters;
use crate::data::record::SecurityRecord;

/// The three user-selected predicates, combined conjunctively.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Minimum Sharpe ratio (inclusive).
    pub min_sharpe: f64,
    /// Inclusive beta range, low then high.
    pub beta_range: (f64, f64),
    /// Sectors to keep. A record passes only if its sector is in this set.
    pub sectors: HashSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_sharpe: filters::DEFAULT_MIN_SHARPE,
            beta_range: filters::DEFAULT_BETA_RANGE,
            sectors: HashSet::new(),
        }
    }
}

impl FilterCriteria {
    /// Default slider values with the given sector selection.
    #[allow(unused)]
    pub fn with_sectors<I, S>(sectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sectors: sectors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Keeps the records satisfying all three predicates: Sharpe ratio at or
/// above the minimum, beta within the inclusive range, sector in the
/// selected set. Pure and order-preserving.
pub fn apply_filters(records: &[SecurityRecord], criteria: &FilterCriteria) -> Vec<SecurityRecord> {
    records
        .iter()
        .filter(|record| {
            record.sharpe_ratio >= criteria.min_sharpe
                && record.beta >= criteria.beta_range.0
                && record.beta <= criteria.beta_range.1
                && criteria.sectors.contains(&record.sector)
        })
        .cloned()
        .collect()
}

/// Moves a slider value by whole steps, snapped to the step grid and clamped
/// to `[min, max]`. Snapping keeps repeated 0.1 adjustments from drifting off
/// the grid in f64.
pub fn step_value(value: f64, delta_steps: i32, min: f64, max: f64) -> f64 {
    let steps = (value / filters::STEP).round() + f64::from(delta_steps);
    (steps * filters::STEP).clamp(min, max)
}
