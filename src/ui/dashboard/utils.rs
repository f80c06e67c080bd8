//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::data::record::SecurityRecord;
use crate::events::Source;
use ratatui::prelude::Color;

/// Colors assigned to sectors in scatter and bar charts, cycled by the
/// sector's position in the option list so both charts agree.
const SECTOR_PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::White,
];

pub fn sector_color(index: usize) -> Color {
    SECTOR_PALETTE[index % SECTOR_PALETTE.len()]
}

/// Get a ratatui color for an event source based on its type
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Refresher => Color::Yellow,
        Source::Exporter => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Bins the Sharpe ratios of `records` into fixed-width buckets starting at
/// zero. Returns (lower-edge label, count) pairs covering every occupied bin
/// up to the maximum observed value.
pub fn sharpe_histogram(records: &[SecurityRecord], bin_width: f64) -> Vec<(String, u64)> {
    if records.is_empty() || bin_width <= 0.0 {
        return Vec::new();
    }

    let max_sharpe = records
        .iter()
        .map(|r| r.sharpe_ratio)
        .fold(f64::MIN, f64::max);
    let bin_count = (max_sharpe / bin_width).floor() as usize + 1;

    let mut bins = vec![0u64; bin_count];
    for record in records {
        // Negative Sharpe ratios land in the first bin.
        let index = (record.sharpe_ratio / bin_width).floor().max(0.0) as usize;
        bins[index.min(bin_count - 1)] += 1;
    }

    bins.iter()
        .enumerate()
        .map(|(i, &count)| (format!("{:.1}", i as f64 * bin_width), count))
        .collect()
}

/// Records per sector, most populated first; ties keep first-appearance
/// order.
pub fn sector_counts(records: &[SecurityRecord]) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(sector, _)| sector == &record.sector) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.sector.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
