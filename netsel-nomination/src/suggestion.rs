//! App-suggested networks, Passpoint suggestions first.
//!
//! Matches from both kinds are collected into one flat list. For every app
//! only the matches at that app's highest suggestion priority are nominated.

use std::collections::HashMap;

use netsel_core::models::{AppId, NetworkConfig, PasspointMatch, ScanDetail, Suggestion};
use tracing::debug;

use crate::materialize;
use crate::nominator::{NominationContext, NominationSources};
use crate::passpoint_helper::{self, ProviderOrigin};

/// One suggestion matched to one scan, with the config to store.
#[derive(Debug, Clone)]
pub struct SuggestionMatch<'s> {
    pub scan: &'s ScanDetail,
    pub app: AppId,
    pub priority: i32,
    pub config: NetworkConfig,
    /// Set for Passpoint suggestions: how the provider matched `scan`.
    pub passpoint: Option<PasspointMatch>,
}

pub(crate) fn nominate(
    scans: &[&ScanDetail],
    ctx: &NominationContext,
    sources: &mut NominationSources<'_>,
    on_connectable: &mut dyn FnMut(&ScanDetail, &NetworkConfig),
) {
    let mut matches = passpoint_matches(scans, ctx, sources);
    matches.extend(generic_matches(scans, ctx, sources));
    let tier = highest_priority_per_app(matches);

    // Stored configs by config key; `None` remembers a failure for the pass.
    let mut stored: HashMap<String, Option<NetworkConfig>> = HashMap::new();
    for m in tier {
        let key = m.config.config_key();
        let config = stored
            .entry(key)
            .or_insert_with(|| {
                let template = materialize::suggestion_config(&m.config, &m.app);
                materialize::ensure_enabled(&mut *sources.config_store, &template, &m.app)
            })
            .clone();
        let Some(mut config) = config else {
            debug!(scan = %m.scan.scan_id(), app = %m.app, "skipping suggestion");
            continue;
        };
        // One stored entry per provider covers every SSID it matched.
        if let Some(kind) = m.passpoint {
            config = materialize::passpoint_config(&config, m.scan, kind);
        }
        sources
            .config_store
            .set_network_candidate_scan_result(config.network_id, m.scan, 0);
        on_connectable(m.scan, &config);
    }
}

/// Keep, for each app, the matches at its highest priority. Flat order is kept.
pub fn highest_priority_per_app(matches: Vec<SuggestionMatch<'_>>) -> Vec<SuggestionMatch<'_>> {
    let mut top: HashMap<AppId, i32> = HashMap::new();
    for m in &matches {
        top.entry(m.app.clone())
            .and_modify(|p| *p = (*p).max(m.priority))
            .or_insert(m.priority);
    }
    matches
        .into_iter()
        .filter(|m| top.get(&m.app) == Some(&m.priority))
        .collect()
}

fn passpoint_matches<'s>(
    scans: &[&'s ScanDetail],
    ctx: &NominationContext,
    sources: &NominationSources<'_>,
) -> Vec<SuggestionMatch<'s>> {
    let mut matches = Vec::new();
    let providers =
        passpoint_helper::match_scans(scans, &*sources.passpoint, ProviderOrigin::Suggestion);
    for pm in providers {
        for suggestion in sources.suggestions.get_suggestions_for_fqdn(&pm.provider.fqdn) {
            if !admissible(&suggestion, pm.scan, ctx, sources) {
                continue;
            }
            matches.push(SuggestionMatch {
                scan: pm.scan,
                config: materialize::passpoint_config(&suggestion.config, pm.scan, pm.kind),
                app: suggestion.app,
                priority: suggestion.priority,
                passpoint: Some(pm.kind),
            });
        }
    }
    matches
}

fn generic_matches<'s>(
    scans: &[&'s ScanDetail],
    ctx: &NominationContext,
    sources: &NominationSources<'_>,
) -> Vec<SuggestionMatch<'s>> {
    let mut matches = Vec::new();
    for &scan in scans {
        for suggestion in sources.suggestions.get_suggestions_for_scan(scan) {
            if suggestion.config.is_passpoint() || !admissible(&suggestion, scan, ctx, sources) {
                continue;
            }
            matches.push(SuggestionMatch {
                scan,
                config: suggestion.config,
                app: suggestion.app,
                priority: suggestion.priority,
                passpoint: None,
            });
        }
    }
    matches
}

fn admissible(
    suggestion: &Suggestion,
    scan: &ScanDetail,
    ctx: &NominationContext,
    sources: &NominationSources<'_>,
) -> bool {
    if suggestion.untrusted && !ctx.untrusted_allowed {
        debug!(scan = %scan.scan_id(), app = %suggestion.app, "untrusted suggestion not allowed");
        return false;
    }
    let key = suggestion.config.config_key();
    match sources.config_store.get_configured_network(&key) {
        Some(saved) if !saved.from_suggestion => {
            debug!(scan = %scan.scan_id(), network = %key, "suggested network is user-saved");
            false
        }
        _ => true,
    }
}
