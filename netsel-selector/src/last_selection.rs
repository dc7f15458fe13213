//! Linear decay of the bonus for the network the user picked last.

use chrono::{DateTime, Duration, Utc};

/// The network the user most recently connected to by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastUserSelection {
    pub network_id: i32,
    pub selected_at: DateTime<Utc>,
}

/// `1 − elapsed / decay`, clamped to `[0, 1]`.
///
/// A selection stamped in the future (clock change) counts as just made.
pub fn last_selection_weight(elapsed: Duration, decay: Duration) -> f64 {
    if decay <= Duration::zero() {
        return 0.0;
    }
    let elapsed_ms = elapsed.num_milliseconds().max(0) as f64;
    (1.0 - elapsed_ms / decay.num_milliseconds() as f64).clamp(0.0, 1.0)
}

impl LastUserSelection {
    /// Weight for `network_id` at `now`; zero for any other network.
    pub fn weight_for(&self, network_id: i32, now: DateTime<Utc>, decay: Duration) -> f64 {
        if network_id != self.network_id {
            return 0.0;
        }
        last_selection_weight(now - self.selected_at, decay)
    }
}
