use serde::{Deserialize, Serialize};

use crate::constants::INVALID_NETWORK_ID;
use crate::identity::match_info::{quote_ssid, unquote_ssid};
use crate::identity::{KeyMgmt, MatchInfo, SecurityType};

use super::AppId;

/// Whether a stored network may currently be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    #[default]
    Enabled,
    TemporarilyDisabled,
    PermanentlyDisabled,
}

/// A network definition, either stored in the config store or about to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// [`INVALID_NETWORK_ID`] until the config store assigns one.
    pub network_id: i32,
    /// Quoted SSID, e.g. `"home"`. Empty for Passpoint templates.
    pub ssid: String,
    pub allowed_key_mgmt: Vec<KeyMgmt>,
    pub wep_keys: Vec<String>,
    /// Passpoint provider FQDN; `Some` marks a Passpoint config.
    pub fqdn: Option<String>,
    /// Not persisted beyond the current session.
    pub ephemeral: bool,
    pub from_suggestion: bool,
    pub metered: bool,
    pub is_home_provider: bool,
    pub selection_status: SelectionStatus,
    pub creator: AppId,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network_id: INVALID_NETWORK_ID,
            ssid: String::new(),
            allowed_key_mgmt: vec![KeyMgmt::None],
            wep_keys: Vec::new(),
            fqdn: None,
            ephemeral: false,
            from_suggestion: false,
            metered: false,
            is_home_provider: false,
            selection_status: SelectionStatus::Enabled,
            creator: AppId::system(),
        }
    }
}

impl NetworkConfig {
    pub fn security_type(&self) -> SecurityType {
        SecurityType::from_key_mgmt(&self.allowed_key_mgmt, &self.wep_keys)
    }

    pub fn match_info(&self) -> MatchInfo {
        MatchInfo::new(&self.ssid, self.security_type())
    }

    pub fn is_passpoint(&self) -> bool {
        self.fqdn.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.selection_status == SelectionStatus::Enabled
    }

    pub fn has_network_id(&self) -> bool {
        self.network_id != INVALID_NETWORK_ID
    }

    /// Unquoted SSID.
    pub fn plain_ssid(&self) -> &str {
        unquote_ssid(&self.ssid)
    }

    /// Set the SSID from its unquoted form.
    pub fn set_plain_ssid(&mut self, ssid: &str) {
        self.ssid = quote_ssid(ssid);
    }

    /// Key under which the config store files this network.
    ///
    /// Passpoint configs are keyed by provider FQDN since one provider covers
    /// many SSIDs.
    pub fn config_key(&self) -> String {
        match &self.fqdn {
            Some(fqdn) => format!("{fqdn}{}", SecurityType::Eap.config_key_suffix()),
            None => self.match_info().config_key(),
        }
    }
}

/// Outcome of `IConfigStore::add_or_update_network`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkUpdateResult {
    pub success: bool,
    pub network_id: i32,
}

impl NetworkUpdateResult {
    pub fn success(network_id: i32) -> Self {
        Self {
            success: true,
            network_id,
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            network_id: INVALID_NETWORK_ID,
        }
    }
}
