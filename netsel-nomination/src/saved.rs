//! Networks the user saved.
//!
//! Passpoint, ephemeral, and suggestion-created configs are left to the
//! nominators that created them.

use netsel_core::models::{NetworkConfig, ScanDetail};
use tracing::debug;

use crate::nominator::NominationSources;

pub(crate) fn nominate(
    scans: &[&ScanDetail],
    sources: &mut NominationSources<'_>,
    on_connectable: &mut dyn FnMut(&ScanDetail, &NetworkConfig),
) {
    for &scan in scans {
        let key = scan.match_info().config_key();
        let Some(config) = sources.config_store.get_configured_network(&key) else {
            continue;
        };
        if config.is_passpoint() || config.ephemeral || config.from_suggestion {
            continue;
        }
        if !config.is_enabled() {
            debug!(
                scan = %scan.scan_id(),
                network_id = config.network_id,
                status = ?config.selection_status,
                "saved network is disabled"
            );
            continue;
        }
        sources
            .config_store
            .set_network_candidate_scan_result(config.network_id, scan, 0);
        on_connectable(scan, &config);
    }
}
