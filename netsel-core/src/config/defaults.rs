// Single source of truth for all default values.

// --- Scoring: RSSI saturation per band (dBm) ---
pub const DEFAULT_GOOD_RSSI_24GHZ: i32 = -60;
pub const DEFAULT_GOOD_RSSI_5GHZ: i32 = -57;
pub const DEFAULT_GOOD_RSSI_6GHZ: i32 = -57;

// --- Scoring: priority-penalizing formulas ---
pub const DEFAULT_BAND_5GHZ_AWARD: i32 = 40;
pub const DEFAULT_SECURITY_AWARD: i32 = 80;
pub const DEFAULT_LAST_SELECTION_AWARD: i32 = 480;
pub const DEFAULT_CUTOFF_RSSI_MIN: i32 = -90;
pub const DEFAULT_CUTOFF_RSSI_MAX: i32 = -80;

// --- Scoring: throughput formula ---
pub const DEFAULT_THROUGHPUT_BONUS_NUMERATOR: i32 = 120;
pub const DEFAULT_THROUGHPUT_BONUS_DENOMINATOR: i32 = 433;
pub const DEFAULT_THROUGHPUT_BONUS_LIMIT: i32 = 200;
pub const DEFAULT_CURRENT_NETWORK_BONUS: i32 = 20;
pub const DEFAULT_SECURE_NETWORK_BONUS: i32 = 40;
pub const DEFAULT_UNMETERED_NETWORK_BONUS: i32 = 1000;
pub const DEFAULT_SAVED_NETWORK_BONUS: i32 = 500;

// --- Selection ---
pub const DEFAULT_SCORER: &str = "ThroughputScorer";
pub const DEFAULT_LAST_SELECTION_DECAY_MINUTES: i64 = 480;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Validation bounds ---
pub const MIN_VALID_RSSI: i32 = -126;
pub const MAX_VALID_RSSI: i32 = 0;
