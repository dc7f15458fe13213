use crate::models::{AppId, NetworkConfig, NetworkUpdateResult, ScanDetail};

/// Stored network definitions.
pub trait IConfigStore {
    /// Look up a stored network by its config key.
    fn get_configured_network(&self, config_key: &str) -> Option<NetworkConfig>;

    /// Store a new network or update the one with the same key.
    fn add_or_update_network(
        &mut self,
        config: &NetworkConfig,
        creator: &AppId,
    ) -> NetworkUpdateResult;

    /// Re-enable a temporarily disabled network if its disable reason has lapsed.
    fn try_enable_network(&mut self, network_id: i32) -> bool;

    /// Unconditionally enable a network.
    fn enable_network(&mut self, network_id: i32, disable_others: bool, creator: &AppId) -> bool;

    /// Remember the scan result that made this network a candidate.
    fn set_network_candidate_scan_result(&mut self, network_id: i32, scan: &ScanDetail, score: i32);

    /// Whether the user deleted an ephemeral network with this (unquoted) SSID.
    fn was_ephemeral_network_deleted(&self, ssid: &str) -> bool;
}
