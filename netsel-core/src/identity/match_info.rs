use std::fmt;

use serde::{Deserialize, Serialize};

use super::SecurityType;

/// Network-level identity: (SSID, security type).
///
/// Derived identically from a live scan and from a stored config; this is the
/// bridge between what was seen on air and what is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Unquoted SSID.
    pub ssid: String,
    pub security_type: SecurityType,
}

impl MatchInfo {
    /// Build from an SSID in either quoted (`"foo"`) or plain form.
    pub fn new(ssid: &str, security_type: SecurityType) -> Self {
        Self {
            ssid: unquote_ssid(ssid).to_string(),
            security_type,
        }
    }

    /// Key under which the config store files a network with this identity.
    pub fn config_key(&self) -> String {
        format!(
            "{}{}",
            quote_ssid(&self.ssid),
            self.security_type.config_key_suffix()
        )
    }
}

impl fmt::Display for MatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", quote_ssid(&self.ssid), self.security_type)
    }
}

/// Wrap an SSID in double quotes, the form stored configs carry.
pub fn quote_ssid(ssid: &str) -> String {
    format!("\"{ssid}\"")
}

/// Strip one pair of surrounding double quotes, if present.
pub fn unquote_ssid(ssid: &str) -> &str {
    ssid.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(ssid)
}
