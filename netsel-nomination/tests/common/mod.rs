use netsel_core::models::{NetworkConfig, ScanDetail};
use netsel_nomination::{NetworkNominator, NominationContext, NominationSources};
use test_fixtures::{FakeConfigStore, FakePasspointMatcher, FakeSuggestionStore};

/// Collaborators for one nominator run.
#[derive(Default)]
pub struct World {
    pub store: FakeConfigStore,
    pub suggestions: FakeSuggestionStore,
    pub passpoint: FakePasspointMatcher,
}

impl World {
    /// Run `nominator` and return `(bssid, config)` for every connectable pair.
    pub fn nominate(
        &mut self,
        nominator: NetworkNominator,
        scans: &[ScanDetail],
        ctx: &NominationContext,
    ) -> Vec<(String, NetworkConfig)> {
        let mut found = Vec::new();
        let mut sources = NominationSources {
            config_store: &mut self.store,
            suggestions: &self.suggestions,
            passpoint: &mut self.passpoint,
        };
        nominator.nominate(scans, ctx, &mut sources, &mut |scan, config| {
            found.push((scan.bssid.clone(), config.clone()));
        });
        found
    }
}
