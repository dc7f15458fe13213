//! CandidateRegistry: validate → dedup (priority, then score) → group by network.

use std::collections::{BTreeMap, HashMap};

use netsel_core::errors::{CandidateFault, NetselResult};
use netsel_core::identity::MacAddress;
use netsel_core::models::{Candidate, CandidateKey, NetworkConfig, ScanDetail, SignalStatistics};
use tracing::debug;

use crate::faults::FaultLog;

/// Per-candidate inputs that come from neither the scan nor the config.
#[derive(Debug, Clone, Default)]
pub struct CandidateAttributes {
    /// Clamped to `[0, 1]` on insertion.
    pub last_selection_weight: f64,
    /// OR'ed with the config's own metered flag.
    pub is_metered: bool,
    pub historical_signal_stats: Option<SignalStatistics>,
}

/// Deduplicating store of the candidates nominated during one pass.
///
/// Holds at most one candidate per [`CandidateKey`]. A new nomination for an
/// existing key replaces it only with a numerically lower-or-equal evaluator
/// priority, and on equal priority only with a strictly higher evaluator score.
#[derive(Debug, Default)]
pub struct CandidateRegistry {
    candidates: HashMap<CandidateKey, Candidate>,
    current_network_id: Option<i32>,
    current_bssid: Option<MacAddress>,
    next_serial: u64,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what the device is connected to so candidates are flagged as
    /// current network / current BSSID.
    pub fn set_current(&mut self, network_id: Option<i32>, bssid: Option<MacAddress>) {
        self.current_network_id = network_id;
        self.current_bssid = bssid;
    }

    /// Nominate `scan` as a candidate for the stored network `config`.
    ///
    /// Returns `Ok(true)` if inserted or replaced, `Ok(false)` if an existing
    /// candidate outranks it. Malformed input goes to `faults`.
    pub fn add(
        &mut self,
        scan: &ScanDetail,
        config: &NetworkConfig,
        evaluator_priority: u32,
        evaluator_score: i32,
        faults: &mut FaultLog,
    ) -> NetselResult<bool> {
        self.add_with(
            scan,
            config,
            evaluator_priority,
            evaluator_score,
            &CandidateAttributes::default(),
            faults,
        )
    }

    /// [`add`](Self::add) with selection weight, metering, and signal history.
    pub fn add_with(
        &mut self,
        scan: &ScanDetail,
        config: &NetworkConfig,
        evaluator_priority: u32,
        evaluator_score: i32,
        attributes: &CandidateAttributes,
        faults: &mut FaultLog,
    ) -> NetselResult<bool> {
        if scan.ssid.is_empty() {
            return faults.record(CandidateFault::MalformedScan {
                reason: format!("empty SSID for BSSID {}", scan.bssid),
            });
        }
        if !config.has_network_id() {
            return faults.record(CandidateFault::MalformedConfig {
                network_id: config.network_id,
                reason: format!("{} has no network id", config.ssid),
            });
        }
        let bssid = match scan.parse_bssid() {
            Ok(bssid) => bssid,
            Err(e) => return faults.record(CandidateFault::UnparsableBssid { bssid: e.input }),
        };

        let match_info = scan.match_info();
        // Passpoint identity is provider based; the config SSID comes from the scan.
        if !config.is_passpoint() {
            let config_info = config.match_info();
            if config_info != match_info {
                return faults.record(CandidateFault::MatchInfoMismatch {
                    scan: match_info,
                    config: config_info,
                });
            }
        }

        let key = CandidateKey::new(match_info, bssid, config.network_id);
        if let Some(old) = self.candidates.get(&key) {
            if evaluator_priority > old.evaluator_priority
                || (evaluator_priority == old.evaluator_priority
                    && evaluator_score <= old.evaluator_score)
            {
                debug!(
                    scan = %scan.scan_id(),
                    network_id = config.network_id,
                    priority = evaluator_priority,
                    score = evaluator_score,
                    existing_priority = old.evaluator_priority,
                    existing_score = old.evaluator_score,
                    "kept existing candidate"
                );
                return Ok(false);
            }
            debug!(
                scan = %scan.scan_id(),
                network_id = config.network_id,
                priority = evaluator_priority,
                score = evaluator_score,
                "replacing candidate"
            );
        }

        self.next_serial += 1;
        let candidate = Candidate {
            serial: self.next_serial,
            scan_rssi: scan.rssi,
            frequency_mhz: scan.frequency_mhz,
            predicted_throughput_mbps: scan.predicted_throughput_mbps,
            evaluator_priority,
            evaluator_score,
            is_current_network: self.current_network_id == Some(config.network_id),
            is_current_bssid: self.current_bssid == Some(bssid),
            is_open_network: key.match_info.security_type.is_open(),
            is_metered: config.metered || attributes.is_metered,
            is_ephemeral: config.ephemeral,
            is_passpoint: config.is_passpoint(),
            last_selection_weight: attributes.last_selection_weight.clamp(0.0, 1.0),
            historical_signal_stats: attributes.historical_signal_stats,
            key: key.clone(),
        };
        self.candidates.insert(key, candidate);
        Ok(true)
    }

    /// Remove `candidate` if that exact instance is still registered.
    ///
    /// A stale copy of a candidate that has since been replaced is ignored.
    pub fn remove(&mut self, candidate: &Candidate) -> bool {
        match self.candidates.get(&candidate.key) {
            Some(current) if current.is_same_instance(candidate) => {
                self.candidates.remove(&candidate.key);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, key: &CandidateKey) -> Option<&Candidate> {
        self.candidates.get(key)
    }

    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// All candidates in insertion order.
    pub fn candidates(&self) -> Vec<&Candidate> {
        let mut all: Vec<&Candidate> = self.candidates.values().collect();
        all.sort_by_key(|c| c.serial);
        all
    }

    /// One group per network id (ascending), each holding every BSSID-level
    /// candidate of that network in insertion order.
    pub fn grouped_candidates(&self) -> Vec<Vec<Candidate>> {
        let mut groups: BTreeMap<i32, Vec<Candidate>> = BTreeMap::new();
        for candidate in self.candidates() {
            groups
                .entry(candidate.network_id())
                .or_default()
                .push(candidate.clone());
        }
        groups.into_values().collect()
    }
}
