use crate::models::{PasspointMatch, PasspointProvider, ScanDetail};

/// Passpoint provider matching against cached ANQP data.
pub trait IPasspointMatcher {
    /// Best provider for the access point, Home preferred over Roaming.
    fn match_provider(&self, scan: &ScanDetail) -> Option<(PasspointProvider, PasspointMatch)>;

    /// Drop expired ANQP cache entries.
    fn sweep_expired_cache(&mut self);
}
