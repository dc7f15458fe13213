use std::fmt;

use serde::{Deserialize, Serialize};

/// Network-level security classification used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    Open,
    Wep,
    Psk,
    Eap,
}

impl SecurityType {
    /// Classify a scan result from its capabilities string,
    /// e.g. `[WPA2-PSK-CCMP][ESS]`.
    pub fn from_capabilities(capabilities: &str) -> Self {
        if capabilities.contains("PSK") {
            Self::Psk
        } else if capabilities.contains("EAP") {
            Self::Eap
        } else if capabilities.contains("WEP") {
            Self::Wep
        } else {
            Self::Open
        }
    }

    /// Classify a stored config from its allowed key management and WEP keys.
    pub fn from_key_mgmt(allowed: &[KeyMgmt], wep_keys: &[String]) -> Self {
        if allowed.contains(&KeyMgmt::WpaPsk) {
            Self::Psk
        } else if allowed.contains(&KeyMgmt::WpaEap) || allowed.contains(&KeyMgmt::Ieee8021x) {
            Self::Eap
        } else if allowed.contains(&KeyMgmt::None) && wep_keys.iter().any(|k| !k.is_empty()) {
            Self::Wep
        } else {
            Self::Open
        }
    }

    /// Suffix appended to the quoted SSID to form a config-store key.
    pub fn config_key_suffix(self) -> &'static str {
        match self {
            Self::Open => "NONE",
            Self::Wep => "WEP",
            Self::Psk => "WPA_PSK",
            Self::Eap => "WPA_EAP",
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Wep => write!(f, "WEP"),
            Self::Psk => write!(f, "PSK"),
            Self::Eap => write!(f, "EAP"),
        }
    }
}

/// Key management schemes a stored config may allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMgmt {
    None,
    WpaPsk,
    WpaEap,
    Ieee8021x,
}
