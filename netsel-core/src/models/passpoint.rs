use serde::{Deserialize, Serialize};

use super::NetworkConfig;

/// How a Passpoint provider matched an access point.
///
/// Ordered so that `Home > Roaming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasspointMatch {
    Roaming,
    Home,
}

/// An installed Passpoint provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasspointProvider {
    pub fqdn: String,
    /// Config template; its SSID is filled in from the matching scan.
    pub config: NetworkConfig,
    /// Installed through an app suggestion rather than by the user.
    #[serde(default)]
    pub from_suggestion: bool,
}
