/// Network id carried by configs that were never stored.
pub const INVALID_NETWORK_ID: i32 = -1;

/// Offset added to a clamped RSSI before scaling in the RSSI base score.
pub const RSSI_SCORE_OFFSET: i32 = 85;

/// Points per dB in the RSSI base score.
pub const RSSI_SCORE_SLOPE: i32 = 4;

/// Subtracted once per unit of evaluator priority by the priority-penalizing scorers.
pub const EVALUATOR_PRIORITY_PENALTY: i32 = 1000;

/// Confidence bucket reported by every scorer.
pub const DEFAULT_CONFIDENCE_BUCKET: u32 = 10;

/// Minimum number of signal polls before historical statistics move the RSSI cutoff.
pub const MIN_POLLS_FOR_SIGNIFICANCE: u32 = 30;

/// Lowest frequency (MHz) counted as the 5 GHz band or above.
pub const BAND_5GHZ_START_MHZ: i32 = 5000;

/// First frequency (MHz) of the 6 GHz band.
pub const BAND_6GHZ_START_MHZ: i32 = 5925;

/// Creator uid used when the system itself materializes a network (Passpoint).
pub const SYSTEM_UID: u32 = 1010;

/// Creator package used when the system itself materializes a network.
pub const SYSTEM_PACKAGE: &str = "system";
