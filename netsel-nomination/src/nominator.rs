use std::fmt;

use netsel_core::identity::MacAddress;
use netsel_core::models::{NetworkConfig, ScanDetail};
use netsel_core::traits::{IConfigStore, IPasspointMatcher, ISuggestionStore};
use tracing::debug;

use crate::{passpoint, saved, suggestion};

/// Stable identity of a nominator. The numeric value is the evaluator
/// priority of its candidates; lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NominatorId {
    Saved = 0,
    Suggestion = 1,
    Passpoint = 2,
}

impl NominatorId {
    pub fn priority(self) -> u32 {
        self as u32
    }
}

/// Connection state and policy for one nomination pass.
#[derive(Debug, Clone, Default)]
pub struct NominationContext {
    pub current_network_id: Option<i32>,
    pub current_bssid: Option<MacAddress>,
    /// Without a connection the current network and BSSID are ignored.
    pub connected: bool,
    /// Whether suggestions marked untrusted may be nominated.
    pub untrusted_allowed: bool,
}

/// Collaborators consulted (and, for stores, updated) while nominating.
pub struct NominationSources<'a> {
    pub config_store: &'a mut dyn IConfigStore,
    pub suggestions: &'a dyn ISuggestionStore,
    pub passpoint: &'a mut dyn IPasspointMatcher,
}

/// The closed set of nomination strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkNominator {
    Saved,
    Suggestion,
    Passpoint,
}

impl NetworkNominator {
    /// Every nominator, in run order.
    pub const ALL: [NetworkNominator; 3] = [
        NetworkNominator::Saved,
        NetworkNominator::Suggestion,
        NetworkNominator::Passpoint,
    ];

    pub fn id(self) -> NominatorId {
        match self {
            NetworkNominator::Saved => NominatorId::Saved,
            NetworkNominator::Suggestion => NominatorId::Suggestion,
            NetworkNominator::Passpoint => NominatorId::Passpoint,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NetworkNominator::Saved => "SavedNetworkNominator",
            NetworkNominator::Suggestion => "SuggestionNetworkNominator",
            NetworkNominator::Passpoint => "PasspointNetworkNominator",
        }
    }

    /// Report every connectable pair found in `scans` through `on_connectable`.
    ///
    /// The sink may be called any number of times, in any order. Store
    /// failures drop the affected match for this pass and are logged.
    pub fn nominate(
        self,
        scans: &[ScanDetail],
        ctx: &NominationContext,
        sources: &mut NominationSources<'_>,
        on_connectable: &mut dyn FnMut(&ScanDetail, &NetworkConfig),
    ) {
        let live = live_scans(scans, &*sources.config_store);
        match self {
            NetworkNominator::Saved => saved::nominate(&live, sources, on_connectable),
            NetworkNominator::Suggestion => {
                suggestion::nominate(&live, ctx, sources, on_connectable)
            }
            NetworkNominator::Passpoint => passpoint::nominate(&live, sources, on_connectable),
        }
    }
}

impl fmt::Display for NetworkNominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scans whose SSID the user has not explicitly deleted.
fn live_scans<'s>(scans: &'s [ScanDetail], store: &dyn IConfigStore) -> Vec<&'s ScanDetail> {
    scans
        .iter()
        .filter(|scan| {
            let deleted = store.was_ephemeral_network_deleted(&scan.ssid);
            if deleted {
                debug!(scan = %scan.scan_id(), "skipping scan of user-deleted network");
            }
            !deleted
        })
        .collect()
}
