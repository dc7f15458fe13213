//! Passpoint networks from user-installed providers.

use netsel_core::models::{AppId, NetworkConfig, ScanDetail};
use tracing::debug;

use crate::materialize;
use crate::nominator::NominationSources;
use crate::passpoint_helper::{self, ProviderOrigin};

pub(crate) fn nominate(
    scans: &[&ScanDetail],
    sources: &mut NominationSources<'_>,
    on_connectable: &mut dyn FnMut(&ScanDetail, &NetworkConfig),
) {
    sources.passpoint.sweep_expired_cache();
    let matches = passpoint_helper::match_scans(scans, &*sources.passpoint, ProviderOrigin::User);
    let system = AppId::system();

    for m in matches {
        let template = materialize::passpoint_config(&m.provider.config, m.scan, m.kind);
        let Some(stored) = materialize::ensure_enabled(&mut *sources.config_store, &template, &system)
        else {
            debug!(scan = %m.scan.scan_id(), fqdn = %m.provider.fqdn, "skipping Passpoint match");
            continue;
        };
        // The stored entry may carry the SSID of an earlier match.
        let config = materialize::passpoint_config(&stored, m.scan, m.kind);
        debug!(
            scan = %m.scan.scan_id(),
            fqdn = %m.provider.fqdn,
            kind = ?m.kind,
            network_id = config.network_id,
            "Passpoint candidate"
        );
        sources
            .config_store
            .set_network_candidate_scan_result(config.network_id, m.scan, 0);
        on_connectable(m.scan, &config);
    }
}
