use crate::models::{ScanDetail, Suggestion};

/// App-submitted network suggestions.
pub trait ISuggestionStore {
    /// Suggestions whose (SSID, security) identity matches the scan.
    fn get_suggestions_for_scan(&self, scan: &ScanDetail) -> Vec<Suggestion>;

    /// Passpoint suggestions for a provider FQDN.
    fn get_suggestions_for_fqdn(&self, fqdn: &str) -> Vec<Suggestion>;
}
