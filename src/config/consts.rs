// src/config/consts.rs

// Listing generation
pub const DEFAULT_LOCATION: &str = "New York";
pub const REGION_CODE: &str = "NY";
pub const MIN_RESULTS: usize = 10;
pub const MAX_RESULTS: usize = 24; // inclusive
pub const RATING_MIN: f64 = 3.0;
pub const RATING_MAX: f64 = 5.0;
pub const REVIEWS_MIN: u32 = 10;
pub const REVIEWS_MAX: u32 = 509; // inclusive

// Simulated network latency
pub const SEARCH_DELAY_MS: u64 = 1500;
pub const JITTER_MS: u64 = 0; // extra 0..=JITTER_MS ms

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const SHEET_NAME: &str = "Businesses";
pub const FILE_PREFIX: &str = "businesses";
pub const FILE_EXT: &str = "xlsx";
pub const PLACEHOLDER: &str = "N/A";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";
