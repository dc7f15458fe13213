//! Turning suggestion and provider templates into stored networks.

use netsel_core::models::{AppId, NetworkConfig, PasspointMatch, ScanDetail, SelectionStatus};
use netsel_core::traits::IConfigStore;
use tracing::{debug, info};

/// Fill a Passpoint template in for the access point it matched.
pub fn passpoint_config(template: &NetworkConfig, scan: &ScanDetail, kind: PasspointMatch) -> NetworkConfig {
    let mut config = template.clone();
    config.set_plain_ssid(&scan.ssid);
    config.is_home_provider = kind == PasspointMatch::Home;
    config
}

/// Mark a suggestion's config as a session-only network owned by `app`.
pub fn suggestion_config(template: &NetworkConfig, app: &AppId) -> NetworkConfig {
    let mut config = template.clone();
    config.ephemeral = true;
    config.from_suggestion = true;
    config.creator = app.clone();
    config
}

/// Make sure `config` is stored and enabled, returning the stored copy.
///
/// An already stored network is re-enabled if needed; one that stays
/// disabled yields `None`. A new network is added under `creator` and
/// enabled; store failures yield `None`.
pub fn ensure_enabled(
    store: &mut dyn IConfigStore,
    config: &NetworkConfig,
    creator: &AppId,
) -> Option<NetworkConfig> {
    let key = config.config_key();
    if let Some(mut existing) = store.get_configured_network(&key) {
        if !existing.is_enabled() {
            if !store.try_enable_network(existing.network_id) {
                debug!(network = %key, network_id = existing.network_id, "network stays disabled");
                return None;
            }
            existing.selection_status = SelectionStatus::Enabled;
        }
        return Some(existing);
    }

    let result = store.add_or_update_network(config, creator);
    if !result.success {
        debug!(network = %key, creator = %creator, "failed to add network");
        return None;
    }
    if !store.enable_network(result.network_id, false, creator) {
        debug!(network = %key, network_id = result.network_id, "failed to enable network");
        return None;
    }
    info!(network = %key, network_id = result.network_id, creator = %creator, "added network");

    let mut stored = config.clone();
    stored.network_id = result.network_id;
    stored.creator = creator.clone();
    stored.selection_status = SelectionStatus::Enabled;
    Some(stored)
}
