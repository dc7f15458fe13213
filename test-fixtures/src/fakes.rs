//! In-memory collaborator fakes that record the calls made against them.

use std::collections::{BTreeMap, HashMap, HashSet};

use netsel_core::identity::MacAddress;
use netsel_core::models::{
    AppId, NetworkConfig, NetworkUpdateResult, PasspointMatch, PasspointProvider, ScanDetail,
    SelectionStatus, SignalStatistics, Suggestion,
};
use netsel_core::traits::{IConfigStore, IPasspointMatcher, ISignalStatistics, ISuggestionStore};

/// Config store keyed by config key.
#[derive(Debug, Default)]
pub struct FakeConfigStore {
    networks: BTreeMap<String, NetworkConfig>,
    next_network_id: i32,
    deleted_ephemeral_ssids: HashSet<String>,
    refuse_try_enable: HashSet<i32>,
    fail_adds: bool,
    fail_enables: bool,
    /// `(network_id, creator)` for every successful add or update.
    pub added: Vec<(i32, AppId)>,
    /// `(network_id, bssid)` for every recorded candidate scan result.
    pub candidate_scan_results: Vec<(i32, String)>,
    /// Network ids passed to `try_enable_network`.
    pub try_enable_calls: Vec<i32>,
}

impl FakeConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `config`, assigning a network id if it has none. Returns the id.
    pub fn insert(&mut self, mut config: NetworkConfig) -> i32 {
        if !config.has_network_id() {
            config.network_id = self.next_network_id;
        }
        self.next_network_id = self.next_network_id.max(config.network_id + 1);
        let id = config.network_id;
        self.networks.insert(config.config_key(), config);
        id
    }

    pub fn with_network(mut self, config: NetworkConfig) -> Self {
        self.insert(config);
        self
    }

    pub fn delete_ephemeral(&mut self, ssid: &str) {
        self.deleted_ephemeral_ssids.insert(ssid.to_string());
    }

    /// Make `try_enable_network` fail for this id.
    pub fn refuse_try_enable(&mut self, network_id: i32) {
        self.refuse_try_enable.insert(network_id);
    }

    pub fn fail_adds(&mut self) {
        self.fail_adds = true;
    }

    pub fn fail_enables(&mut self) {
        self.fail_enables = true;
    }

    pub fn network(&self, config_key: &str) -> Option<&NetworkConfig> {
        self.networks.get(config_key)
    }

    pub fn network_by_id(&self, network_id: i32) -> Option<&NetworkConfig> {
        self.networks.values().find(|n| n.network_id == network_id)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    fn set_status(&mut self, network_id: i32, status: SelectionStatus) -> bool {
        match self.networks.values_mut().find(|n| n.network_id == network_id) {
            Some(network) => {
                network.selection_status = status;
                true
            }
            None => false,
        }
    }
}

impl IConfigStore for FakeConfigStore {
    fn get_configured_network(&self, config_key: &str) -> Option<NetworkConfig> {
        self.networks.get(config_key).cloned()
    }

    fn add_or_update_network(
        &mut self,
        config: &NetworkConfig,
        creator: &AppId,
    ) -> NetworkUpdateResult {
        if self.fail_adds {
            return NetworkUpdateResult::failure();
        }
        let mut stored = config.clone();
        stored.network_id = self
            .networks
            .get(&config.config_key())
            .map(|existing| existing.network_id)
            .unwrap_or(netsel_core::constants::INVALID_NETWORK_ID);
        stored.creator = creator.clone();
        let id = self.insert(stored);
        self.added.push((id, creator.clone()));
        NetworkUpdateResult::success(id)
    }

    fn try_enable_network(&mut self, network_id: i32) -> bool {
        self.try_enable_calls.push(network_id);
        if self.refuse_try_enable.contains(&network_id) {
            return false;
        }
        self.set_status(network_id, SelectionStatus::Enabled)
    }

    fn enable_network(&mut self, network_id: i32, _disable_others: bool, _creator: &AppId) -> bool {
        if self.fail_enables {
            return false;
        }
        self.set_status(network_id, SelectionStatus::Enabled)
    }

    fn set_network_candidate_scan_result(&mut self, network_id: i32, scan: &ScanDetail, _score: i32) {
        self.candidate_scan_results
            .push((network_id, scan.bssid.clone()));
    }

    fn was_ephemeral_network_deleted(&self, ssid: &str) -> bool {
        self.deleted_ephemeral_ssids.contains(ssid)
    }
}

/// Suggestion store holding a flat list of suggestions.
#[derive(Debug, Default)]
pub struct FakeSuggestionStore {
    pub suggestions: Vec<Suggestion>,
}

impl FakeSuggestionStore {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

impl ISuggestionStore for FakeSuggestionStore {
    fn get_suggestions_for_scan(&self, scan: &ScanDetail) -> Vec<Suggestion> {
        let info = scan.match_info();
        self.suggestions
            .iter()
            .filter(|s| !s.config.is_passpoint() && s.config.match_info() == info)
            .cloned()
            .collect()
    }

    fn get_suggestions_for_fqdn(&self, fqdn: &str) -> Vec<Suggestion> {
        self.suggestions
            .iter()
            .filter(|s| s.config.fqdn.as_deref() == Some(fqdn))
            .cloned()
            .collect()
    }
}

/// Passpoint matcher keyed by SSID.
#[derive(Debug, Default)]
pub struct FakePasspointMatcher {
    matches: HashMap<String, Vec<(PasspointProvider, PasspointMatch)>>,
    /// Number of `sweep_expired_cache` calls.
    pub sweeps: usize,
}

impl FakePasspointMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// APs broadcasting `ssid` match `provider` as `kind`.
    pub fn add_match(&mut self, ssid: &str, provider: PasspointProvider, kind: PasspointMatch) {
        self.matches
            .entry(ssid.to_string())
            .or_default()
            .push((provider, kind));
    }
}

impl IPasspointMatcher for FakePasspointMatcher {
    fn match_provider(&self, scan: &ScanDetail) -> Option<(PasspointProvider, PasspointMatch)> {
        let candidates = self.matches.get(&scan.ssid)?;
        // First Home match wins, then first Roaming match.
        candidates
            .iter()
            .find(|(_, kind)| *kind == PasspointMatch::Home)
            .or_else(|| candidates.first())
            .cloned()
    }

    fn sweep_expired_cache(&mut self) {
        self.sweeps += 1;
    }
}

/// Signal statistics keyed by BSSID.
#[derive(Debug, Default)]
pub struct FakeSignalStatistics {
    pub stats: HashMap<MacAddress, SignalStatistics>,
}

impl FakeSignalStatistics {
    pub fn with(mut self, bssid: MacAddress, stats: SignalStatistics) -> Self {
        self.stats.insert(bssid, stats);
        self
    }
}

impl ISignalStatistics for FakeSignalStatistics {
    fn get_signal_statistics(&self, bssid: &MacAddress) -> Option<SignalStatistics> {
        self.stats.get(bssid).copied()
    }
}
