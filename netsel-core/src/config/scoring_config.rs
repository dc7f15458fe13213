use serde::{Deserialize, Serialize};

use crate::constants::{BAND_5GHZ_START_MHZ, BAND_6GHZ_START_MHZ};
use crate::traits::IScoringParams;

use super::defaults;

/// Scoring parameters. The default provider of [`IScoringParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub good_rssi_24ghz: i32,
    pub good_rssi_5ghz: i32,
    pub good_rssi_6ghz: i32,
    pub band_5ghz_award: i32,
    pub security_award: i32,
    pub last_selection_award: i32,
    pub throughput_bonus_numerator: i32,
    pub throughput_bonus_denominator: i32,
    pub throughput_bonus_limit: i32,
    pub current_network_bonus: i32,
    pub secure_network_bonus: i32,
    pub unmetered_network_bonus: i32,
    pub saved_network_bonus: i32,
    pub cutoff_rssi_min: i32,
    pub cutoff_rssi_max: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            good_rssi_24ghz: defaults::DEFAULT_GOOD_RSSI_24GHZ,
            good_rssi_5ghz: defaults::DEFAULT_GOOD_RSSI_5GHZ,
            good_rssi_6ghz: defaults::DEFAULT_GOOD_RSSI_6GHZ,
            band_5ghz_award: defaults::DEFAULT_BAND_5GHZ_AWARD,
            security_award: defaults::DEFAULT_SECURITY_AWARD,
            last_selection_award: defaults::DEFAULT_LAST_SELECTION_AWARD,
            throughput_bonus_numerator: defaults::DEFAULT_THROUGHPUT_BONUS_NUMERATOR,
            throughput_bonus_denominator: defaults::DEFAULT_THROUGHPUT_BONUS_DENOMINATOR,
            throughput_bonus_limit: defaults::DEFAULT_THROUGHPUT_BONUS_LIMIT,
            current_network_bonus: defaults::DEFAULT_CURRENT_NETWORK_BONUS,
            secure_network_bonus: defaults::DEFAULT_SECURE_NETWORK_BONUS,
            unmetered_network_bonus: defaults::DEFAULT_UNMETERED_NETWORK_BONUS,
            saved_network_bonus: defaults::DEFAULT_SAVED_NETWORK_BONUS,
            cutoff_rssi_min: defaults::DEFAULT_CUTOFF_RSSI_MIN,
            cutoff_rssi_max: defaults::DEFAULT_CUTOFF_RSSI_MAX,
        }
    }
}

impl IScoringParams for ScoringConfig {
    fn good_rssi(&self, frequency_mhz: i32) -> i32 {
        if frequency_mhz >= BAND_6GHZ_START_MHZ {
            self.good_rssi_6ghz
        } else if frequency_mhz >= BAND_5GHZ_START_MHZ {
            self.good_rssi_5ghz
        } else {
            self.good_rssi_24ghz
        }
    }

    fn band_5ghz_award(&self) -> i32 {
        self.band_5ghz_award
    }

    fn security_award(&self) -> i32 {
        self.security_award
    }

    fn last_selection_award(&self) -> i32 {
        self.last_selection_award
    }

    fn throughput_bonus_numerator(&self) -> i32 {
        self.throughput_bonus_numerator
    }

    fn throughput_bonus_denominator(&self) -> i32 {
        self.throughput_bonus_denominator
    }

    fn throughput_bonus_limit(&self) -> i32 {
        self.throughput_bonus_limit
    }

    fn current_network_bonus(&self) -> i32 {
        self.current_network_bonus
    }

    fn secure_network_bonus(&self) -> i32 {
        self.secure_network_bonus
    }

    fn unmetered_network_bonus(&self) -> i32 {
        self.unmetered_network_bonus
    }

    fn saved_network_bonus(&self) -> i32 {
        self.saved_network_bonus
    }

    fn cutoff_rssi_min(&self) -> i32 {
        self.cutoff_rssi_min
    }

    fn cutoff_rssi_max(&self) -> i32 {
        self.cutoff_rssi_max
    }
}
