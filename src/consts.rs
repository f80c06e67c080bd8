pub mod screener_consts {
    //! Screener Configuration Constants
    //!
    //! This module contains all configuration constants for the screener,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // FILTER WIDGET CONFIGURATION
    // =============================================================================
    // Widget bounds are fixed: values outside these ranges cannot be expressed
    // by the interface regardless of the underlying data.

    pub mod filters {
        /// Lower bound of the minimum-Sharpe slider.
        pub const SHARPE_MIN: f64 = 0.0;

        /// Upper bound of the minimum-Sharpe slider.
        pub const SHARPE_MAX: f64 = 3.0;

        /// Starting value of the minimum-Sharpe slider.
        pub const DEFAULT_MIN_SHARPE: f64 = 1.5;

        /// Lower bound of the beta range slider.
        pub const BETA_MIN: f64 = 0.0;

        /// Upper bound of the beta range slider.
        pub const BETA_MAX: f64 = 3.0;

        /// Starting beta range (inclusive endpoints).
        pub const DEFAULT_BETA_RANGE: (f64, f64) = (0.5, 1.5);

        /// Slider step for both Sharpe and beta controls.
        pub const STEP: f64 = 0.1;
    }

    // =============================================================================
    // DATASET CACHE CONFIGURATION
    // =============================================================================

    pub mod cache {
        use std::time::Duration;

        /// How long a loaded dataset is served from memory (seconds).
        /// Expiry is wall-clock only; a newer file on disk does not
        /// invalidate a live entry.
        pub const TTL_SECS: u64 = 3600;

        /// Helper function to get the cache time-to-live
        pub const fn ttl() -> Duration {
            Duration::from_secs(TTL_SECS)
        }
    }

    // =============================================================================
    // DATA LOCATIONS
    // =============================================================================

    pub mod data {
        /// Directory the external computation script writes into.
        pub const DATA_DIR: &str = "sharpe_outputs";

        /// File name of the precomputed dataset inside [`DATA_DIR`].
        pub const DEFAULT_FILE_NAME: &str = "sharpe_filtered.json";

        /// Prefix of dated export artifacts.
        pub const EXPORT_PREFIX: &str = "sharpe_filtered";

        /// Default external computation command, as program + arguments.
        /// The script's only contract is that the dataset file has been
        /// (re)written when it exits.
        pub const DEFAULT_REFRESH_COMMAND: &[&str] = &["python", "full_sharpe_script.py"];
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        /// The maximum number of events to keep in the activity logs.
        pub const MAX_ACTIVITY_LOGS: usize = 100;

        /// Key event poll interval for the render loop (milliseconds).
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// How long the splash screen is shown before the dashboard (seconds).
        pub const SPLASH_SECS: u64 = 2;

        /// Bin width of the Sharpe ratio histogram.
        pub const HISTOGRAM_BIN_WIDTH: f64 = 0.5;
    }
}
