//! CSV and JSON snapshots of the filtered record set.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::consts::screener_consts::data as data_consts;
use crate::data::record::SecurityRecord;
use crate::error::ScreenerError;

/// Header row of CSV exports, matching the wire column names.
const CSV_HEADER: &str = "Ticker,Sharpe Ratio,Beta,Annual Return (%),Sector";

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Dated artifact path: `<dir>/sharpe_filtered_<YYYY-MM-DD>.<ext>`.
pub fn export_path(dir: &Path, format: ExportFormat) -> PathBuf {
    let today = Local::now().date_naive();
    dir.join(format!(
        "{}_{}.{}",
        data_consts::EXPORT_PREFIX,
        today,
        format.extension()
    ))
}

/// Writes a snapshot of exactly `records`, in order, in the given format.
pub fn write_snapshot(
    path: &Path,
    records: &[SecurityRecord],
    format: ExportFormat,
) -> Result<(), ScreenerError> {
    match format {
        ExportFormat::Csv => write_csv(path, records),
        ExportFormat::Json => write_json(path, records),
    }
}

/// Writes the records as CSV with the wire column header.
pub fn write_csv(path: &Path, records: &[SecurityRecord]) -> Result<(), ScreenerError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            csv_field(&record.ticker),
            record.sharpe_ratio,
            record.beta,
            record.annual_return_pct,
            csv_field(&record.sector),
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the records as a pretty-printed JSON array with the wire keys.
pub fn write_json(path: &Path, records: &[SecurityRecord]) -> Result<(), ScreenerError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
        ScreenerError::MalformedData {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush()?;
    Ok(())
}

// Quote string fields, escaping embedded quotes by doubling them.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
