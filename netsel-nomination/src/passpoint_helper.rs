//! Provider matching shared by the Passpoint and suggestion nominators.

use netsel_core::models::{PasspointMatch, PasspointProvider, ScanDetail};
use netsel_core::traits::IPasspointMatcher;

/// Which installed providers a caller is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOrigin {
    /// Installed by the user.
    User,
    /// Installed through an app suggestion.
    Suggestion,
}

impl ProviderOrigin {
    fn owns(self, provider: &PasspointProvider) -> bool {
        provider.from_suggestion == (self == ProviderOrigin::Suggestion)
    }
}

#[derive(Debug, Clone)]
pub struct ProviderScanMatch<'s> {
    pub scan: &'s ScanDetail,
    pub provider: PasspointProvider,
    pub kind: PasspointMatch,
}

/// Match interworking scans to providers of `origin`, Home matches first.
///
/// Order within Home and within Roaming follows scan order.
pub fn match_scans<'s>(
    scans: &[&'s ScanDetail],
    matcher: &dyn IPasspointMatcher,
    origin: ProviderOrigin,
) -> Vec<ProviderScanMatch<'s>> {
    let mut matches: Vec<ProviderScanMatch<'s>> = scans
        .iter()
        .filter(|scan| scan.is_interworking)
        .filter_map(|&scan| {
            let (provider, kind) = matcher.match_provider(scan)?;
            origin.owns(&provider).then_some(ProviderScanMatch {
                scan,
                provider,
                kind,
            })
        })
        .collect();
    // Stable, so scan order survives within each kind.
    matches.sort_by(|a, b| b.kind.cmp(&a.kind));
    matches
}
