use serde::{Deserialize, Serialize};

use crate::identity::{MacAddress, MatchInfo};

use super::SignalStatistics;

/// Identity of one candidate in the registry.
///
/// Equality and hash cover all three fields, so the same BSSID nominated under
/// two stored networks yields two distinct candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateKey {
    pub match_info: MatchInfo,
    pub bssid: MacAddress,
    pub network_id: i32,
}

impl CandidateKey {
    pub fn new(match_info: MatchInfo, bssid: MacAddress, network_id: i32) -> Self {
        Self {
            match_info,
            bssid,
            network_id,
        }
    }
}

/// One scan-observation-to-network pairing eligible for connection.
///
/// Built fresh every evaluation pass and never mutated after it is
/// registered; replacement removes and reinserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub key: CandidateKey,
    /// Registry-assigned instance number, distinguishing a replacement from the
    /// candidate it replaced. Zero until registered.
    #[serde(default)]
    pub serial: u64,
    pub scan_rssi: i32,
    pub frequency_mhz: i32,
    pub predicted_throughput_mbps: i32,
    /// Rank of the nominating source; lower wins.
    pub evaluator_priority: u32,
    pub evaluator_score: i32,
    pub is_current_network: bool,
    #[serde(default)]
    pub is_current_bssid: bool,
    pub is_open_network: bool,
    pub is_metered: bool,
    pub is_ephemeral: bool,
    #[serde(default)]
    pub is_passpoint: bool,
    /// In `[0, 1]`; 1 right after the user picked this network.
    pub last_selection_weight: f64,
    #[serde(default)]
    pub historical_signal_stats: Option<SignalStatistics>,
}

impl Candidate {
    pub fn network_id(&self) -> i32 {
        self.key.network_id
    }

    pub fn bssid(&self) -> MacAddress {
        self.key.bssid
    }

    pub fn ssid(&self) -> &str {
        &self.key.match_info.ssid
    }

    /// Whether `other` is the very instance this one was registered as.
    pub fn is_same_instance(&self, other: &Candidate) -> bool {
        self.serial == other.serial && self.key == other.key
    }
}
