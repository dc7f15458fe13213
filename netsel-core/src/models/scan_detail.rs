use serde::{Deserialize, Serialize};

use crate::constants::{BAND_5GHZ_START_MHZ, BAND_6GHZ_START_MHZ};
use crate::identity::{MacAddress, MacParseError, MatchInfo, SecurityType};

/// One access point observation from a scan.
///
/// The BSSID is kept as the raw reported text; it is parsed (and may be
/// rejected) when the observation is registered as a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanDetail {
    /// Unquoted SSID as broadcast.
    pub ssid: String,
    pub bssid: String,
    /// Capabilities string, e.g. `[WPA2-PSK-CCMP][ESS]`.
    pub capabilities: String,
    /// Signal strength in dBm.
    pub rssi: i32,
    pub frequency_mhz: i32,
    #[serde(default)]
    pub predicted_throughput_mbps: i32,
    /// Whether the AP advertises 802.11u interworking (Passpoint capable).
    #[serde(default)]
    pub is_interworking: bool,
}

impl ScanDetail {
    pub fn match_info(&self) -> MatchInfo {
        MatchInfo::new(&self.ssid, self.security_type())
    }

    pub fn security_type(&self) -> SecurityType {
        SecurityType::from_capabilities(&self.capabilities)
    }

    pub fn parse_bssid(&self) -> Result<MacAddress, MacParseError> {
        MacAddress::parse(&self.bssid)
    }

    pub fn is_5ghz_or_above(&self) -> bool {
        self.frequency_mhz >= BAND_5GHZ_START_MHZ
    }

    pub fn is_6ghz(&self) -> bool {
        self.frequency_mhz >= BAND_6GHZ_START_MHZ
    }

    /// Short `ssid:bssid` tag used in log lines.
    pub fn scan_id(&self) -> String {
        format!("{}:{}", self.ssid, self.bssid)
    }
}
