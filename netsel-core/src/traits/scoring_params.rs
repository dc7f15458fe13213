/// Tunable scoring parameters.
pub trait IScoringParams {
    /// RSSI (dBm) above which signal strength stops improving the score.
    fn good_rssi(&self, frequency_mhz: i32) -> i32;

    /// Bonus for 5 GHz and above, used by the priority-penalizing scorers.
    fn band_5ghz_award(&self) -> i32;
    /// Bonus for non-open networks, used by the priority-penalizing scorers.
    fn security_award(&self) -> i32;
    /// Bonus at full last-selection weight.
    fn last_selection_award(&self) -> i32;

    fn throughput_bonus_numerator(&self) -> i32;
    fn throughput_bonus_denominator(&self) -> i32;
    fn throughput_bonus_limit(&self) -> i32;

    fn current_network_bonus(&self) -> i32;
    /// Bonus for non-open networks in the throughput formula.
    fn secure_network_bonus(&self) -> i32;
    fn unmetered_network_bonus(&self) -> i32;
    fn saved_network_bonus(&self) -> i32;

    /// Rails for the statistics-derived RSSI cutoff.
    fn cutoff_rssi_min(&self) -> i32;
    fn cutoff_rssi_max(&self) -> i32;
}
