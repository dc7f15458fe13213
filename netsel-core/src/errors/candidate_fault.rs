use crate::identity::MatchInfo;

/// Malformed input rejected by the candidate registry.
///
/// Faults are local and non-fatal: in tolerant mode they are counted and
/// skipped, in picky mode they propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateFault {
    #[error("malformed scan result: {reason}")]
    MalformedScan { reason: String },

    #[error("malformed network config {network_id}: {reason}")]
    MalformedConfig { network_id: i32, reason: String },

    #[error("unparsable BSSID '{bssid}'")]
    UnparsableBssid { bssid: String },

    #[error("scan {scan} does not match network config {config}")]
    MatchInfoMismatch { scan: MatchInfo, config: MatchInfo },
}
