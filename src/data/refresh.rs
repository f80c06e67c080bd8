//! Regeneration of the precomputed dataset via the external script.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::process::Command;

use crate::data::loader::DatasetCache;
use crate::data::record::SecurityRecord;
use crate::error::ScreenerError;

/// Runs the external computation script to completion, then reloads the
/// dataset through `cache`.
///
/// The script is awaited with no timeout and no retry; the caller stays
/// blocked for its full duration. Its exit status carries no contract: a run
/// that failed shows up as a missing or stale file on the reload. Returns the
/// records together with the elapsed seconds, rounded to two decimals.
///
/// # Errors
/// `Script` if the command cannot be spawned at all, otherwise whatever the
/// reload reports.
pub async fn run_refresh(
    command: &[String],
    cache: &mut DatasetCache,
    data_file: &Path,
) -> Result<(Arc<Vec<SecurityRecord>>, f64), ScreenerError> {
    let (program, args) = command.split_first().ok_or_else(|| ScreenerError::Script {
        command: String::new(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty refresh command"),
    })?;

    let started = Instant::now();
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|source| ScreenerError::Script {
            command: command.join(" "),
            source,
        })?;
    let _ = status; // exit code not inspected

    let elapsed = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;
    let records = cache.load(data_file)?;
    Ok((records, elapsed))
}
