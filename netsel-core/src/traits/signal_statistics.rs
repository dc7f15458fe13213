use crate::identity::MacAddress;
use crate::models::SignalStatistics;

/// Historical per-BSSID signal statistics. Read-only snapshot access.
pub trait ISignalStatistics {
    fn get_signal_statistics(&self, bssid: &MacAddress) -> Option<SignalStatistics>;
}

/// No history available.
impl ISignalStatistics for () {
    fn get_signal_statistics(&self, _bssid: &MacAddress) -> Option<SignalStatistics> {
        None
    }
}
