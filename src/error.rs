//! Error handling for the screener

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenerError {
    /// Terminal or filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No precomputed dataset at the expected location.
    #[error("no dataset found at {}", path.display())]
    MissingData { path: PathBuf },

    /// The dataset file exists but could not be parsed into records.
    #[error("malformed dataset {}: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The external computation script could not be started at all.
    /// A script that starts and fails is not detected here; the
    /// subsequent dataset load surfaces the missing or stale file.
    #[error("failed to run refresh command `{command}`: {source}")]
    Script {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
