//! Time-boxed memoized dataset loading.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::consts::screener_consts::cache;
use crate::data::record::SecurityRecord;
use crate::error::ScreenerError;

#[derive(Debug)]
struct CacheEntry {
    records: Arc<Vec<SecurityRecord>>,
    loaded_at: Instant,
}

/// Memoized dataset load keyed by file path.
///
/// An entry younger than the TTL is served from memory without touching the
/// disk. Expiry is wall-clock only: a rewritten file inside the window keeps
/// serving the cached copy until the entry ages out.
#[derive(Debug)]
pub struct DatasetCache {
    ttl: Duration,
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::with_ttl(cache::ttl())
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Returns the records for `path`, reading the file only when no fresh
    /// cache entry exists.
    ///
    /// # Errors
    /// `MissingData` if the file does not exist, `MalformedData` if it cannot
    /// be parsed into records, `Io` for any other read failure.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Vec<SecurityRecord>>, ScreenerError> {
        if let Some(entry) = self.entries.get(path) {
            if entry.loaded_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&entry.records));
            }
        }

        let records = Arc::new(read_records(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                records: Arc::clone(&records),
                loaded_at: Instant::now(),
            },
        );
        Ok(records)
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses the dataset file, bypassing the cache.
pub fn read_records(path: &Path) -> Result<Vec<SecurityRecord>, ScreenerError> {
    let buf = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScreenerError::MissingData {
            path: path.to_path_buf(),
        },
        _ => ScreenerError::Io(e),
    })?;
    serde_json::from_slice(&buf).map_err(|source| ScreenerError::MalformedData {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_ROWS: &str = r#"[
        {"Ticker": "AAPL", "Sharpe Ratio": 2.1, "Beta": 1.2, "Annual Return (%)": 31.0, "Sector": "Technology"},
        {"Ticker": "XOM", "Sharpe Ratio": 1.3, "Beta": 0.8, "Annual Return (%)": 14.0, "Sector": null}
    ]"#;

    #[test]
    // A load inside the TTL window must serve the cached copy even when the
    // file changed on disk.
    fn test_load_serves_cached_copy_within_ttl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, TWO_ROWS).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        assert_eq!(first.len(), 2);

        // Rewrite the file; the cache must not notice.
        fs::write(&path, "[]").unwrap();
        let second = cache.load(&path).unwrap();
        assert_eq!(second.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    // An expired entry is re-read from disk.
    fn test_load_rereads_after_expiry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, TWO_ROWS).unwrap();

        let mut cache = DatasetCache::with_ttl(Duration::ZERO);
        let first = cache.load(&path).unwrap();
        assert_eq!(first.len(), 2);

        fs::write(&path, "[]").unwrap();
        let second = cache.load(&path).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    // Sector normalization happens before the records enter the cache.
    fn test_load_normalizes_sectors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, TWO_ROWS).unwrap();

        let mut cache = DatasetCache::new();
        let records = cache.load(&path).unwrap();
        assert_eq!(records[1].sector, "Unknown");
    }

    #[test]
    // A missing file is a MissingData error, not a generic I/O error.
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let mut cache = DatasetCache::new();
        match cache.load(&path) {
            Err(ScreenerError::MissingData { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingData, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    // Malformed JSON is surfaced as MalformedData and is not cached.
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let mut cache = DatasetCache::new();
        assert!(matches!(
            cache.load(&path),
            Err(ScreenerError::MalformedData { .. })
        ));

        // A corrected file must load on the next attempt.
        fs::write(&path, TWO_ROWS).unwrap();
        assert_eq!(cache.load(&path).unwrap().len(), 2);
    }
}
