//! Builders for scans, configs, and candidates with sensible defaults.

use netsel_core::identity::{KeyMgmt, MacAddress, MatchInfo, SecurityType};
use netsel_core::models::{
    AppId, Candidate, CandidateKey, NetworkConfig, PasspointProvider, ScanDetail, Suggestion,
};

/// Capabilities string a scan of this security type would report.
pub fn capabilities_for(security: SecurityType) -> &'static str {
    match security {
        SecurityType::Open => "[ESS]",
        SecurityType::Wep => "[WEP][ESS]",
        SecurityType::Psk => "[WPA2-PSK-CCMP][ESS]",
        SecurityType::Eap => "[WPA2-EAP-CCMP][ESS]",
    }
}

/// Scan of an AP at -60 dBm on 2437 MHz.
pub fn scan(ssid: &str, bssid: &str, security: SecurityType) -> ScanDetail {
    ScanDetail {
        ssid: ssid.to_string(),
        bssid: bssid.to_string(),
        capabilities: capabilities_for(security).to_string(),
        rssi: -60,
        frequency_mhz: 2437,
        predicted_throughput_mbps: 0,
        is_interworking: false,
    }
}

/// Scan of a Passpoint-capable (interworking) EAP AP.
pub fn passpoint_scan(ssid: &str, bssid: &str) -> ScanDetail {
    ScanDetail {
        is_interworking: true,
        ..scan(ssid, bssid, SecurityType::Eap)
    }
}

/// Key management a config of this security type would allow.
pub fn key_mgmt_for(security: SecurityType) -> (Vec<KeyMgmt>, Vec<String>) {
    match security {
        SecurityType::Open => (vec![KeyMgmt::None], Vec::new()),
        SecurityType::Wep => (vec![KeyMgmt::None], vec!["\"abcde\"".to_string()]),
        SecurityType::Psk => (vec![KeyMgmt::WpaPsk], Vec::new()),
        SecurityType::Eap => (vec![KeyMgmt::WpaEap, KeyMgmt::Ieee8021x], Vec::new()),
    }
}

/// Stored (user-saved) network config.
pub fn config(network_id: i32, ssid: &str, security: SecurityType) -> NetworkConfig {
    let (allowed_key_mgmt, wep_keys) = key_mgmt_for(security);
    let mut config = NetworkConfig {
        network_id,
        allowed_key_mgmt,
        wep_keys,
        ..Default::default()
    };
    config.set_plain_ssid(ssid);
    config
}

/// Suggestion from `app` at `priority`; the config has no network id yet.
pub fn suggestion(ssid: &str, security: SecurityType, app: &AppId, priority: i32) -> Suggestion {
    Suggestion {
        config: config(netsel_core::constants::INVALID_NETWORK_ID, ssid, security),
        app: app.clone(),
        priority,
        untrusted: false,
    }
}

/// Passpoint provider with an EAP config template.
pub fn provider(fqdn: &str) -> PasspointProvider {
    let (allowed_key_mgmt, _) = key_mgmt_for(SecurityType::Eap);
    PasspointProvider {
        fqdn: fqdn.to_string(),
        config: NetworkConfig {
            fqdn: Some(fqdn.to_string()),
            allowed_key_mgmt,
            ..Default::default()
        },
        from_suggestion: false,
    }
}

/// Passpoint suggestion from `app` for the provider FQDN.
pub fn passpoint_suggestion(fqdn: &str, app: &AppId, priority: i32) -> Suggestion {
    Suggestion {
        config: provider(fqdn).config,
        app: app.clone(),
        priority,
        untrusted: false,
    }
}

/// `00:00:00:00:00:<last>`.
pub fn bssid(last: u8) -> MacAddress {
    MacAddress::new([0, 0, 0, 0, 0, last])
}

/// Open 2.4 GHz candidate at -60 dBm with every flag cleared.
pub fn candidate(ssid: &str, bssid_last: u8, network_id: i32) -> Candidate {
    Candidate {
        key: CandidateKey::new(
            MatchInfo::new(ssid, SecurityType::Open),
            bssid(bssid_last),
            network_id,
        ),
        serial: 0,
        scan_rssi: -60,
        frequency_mhz: 2437,
        predicted_throughput_mbps: 0,
        evaluator_priority: 0,
        evaluator_score: 0,
        is_current_network: false,
        is_current_bssid: false,
        is_open_network: true,
        is_metered: false,
        is_ephemeral: false,
        is_passpoint: false,
        last_selection_weight: 0.0,
        historical_signal_stats: None,
    }
}
