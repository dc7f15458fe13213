//! NetworkSelector: one selection pass from scans to a ranked winner.

use chrono::{DateTime, Duration, Utc};
use netsel_core::config::NetselConfig;
use netsel_core::errors::{CandidateFault, ConfigError, NetselError, NetselResult};
use netsel_core::models::{ScanDetail, ScoredCandidate};
use netsel_core::traits::ISignalStatistics;
use netsel_nomination::{NetworkNominator, NominationContext, NominationSources};
use netsel_registry::{CandidateAttributes, CandidateRegistry, FaultLog};
use netsel_scoring::{best_of, Scorer, ScorerKind};
use tracing::{debug, info, info_span};

use crate::last_selection::LastUserSelection;

/// Inputs of one pass beyond the scans and collaborators.
#[derive(Debug, Clone)]
pub struct SelectionContext {
    pub nomination: NominationContext,
    pub last_user_selection: Option<LastUserSelection>,
    pub now: DateTime<Utc>,
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self {
            nomination: NominationContext::default(),
            last_user_selection: None,
            now: Utc::now(),
        }
    }
}

/// Result of one pass.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    /// One winner per network group, ordered by network id.
    pub winners: Vec<ScoredCandidate>,
    /// Best of `winners`; `NONE` if nothing was connectable.
    pub best: ScoredCandidate,
    /// The best candidate is the access point already associated with.
    pub best_is_current_bssid: bool,
    pub candidate_count: usize,
    pub fault_count: usize,
    pub last_fault: Option<CandidateFault>,
}

#[derive(Debug)]
pub struct NetworkSelector {
    config: NetselConfig,
    scorer: ScorerKind,
    last_selection_decay: Duration,
    nominators: Vec<NetworkNominator>,
}

impl NetworkSelector {
    /// Validate `config` and resolve its scorer. Nominators run in id order.
    pub fn new(config: NetselConfig) -> NetselResult<Self> {
        config.validate()?;
        let scorer: ScorerKind = config.selection.scorer.parse()?;
        let minutes = config.selection.last_selection_decay_minutes;
        let last_selection_decay =
            Duration::try_minutes(minutes).ok_or_else(|| ConfigError::ValidationFailed {
                field: "selection.last_selection_decay_minutes".to_string(),
                message: format!("{minutes} minutes is out of range"),
            })?;
        Ok(Self {
            config,
            scorer,
            last_selection_decay,
            nominators: NetworkNominator::ALL.to_vec(),
        })
    }

    pub fn scorer(&self) -> ScorerKind {
        self.scorer
    }

    pub fn config(&self) -> &NetselConfig {
        &self.config
    }

    /// Run one pass. With the picky fault policy the first fault aborts it.
    pub fn select(
        &self,
        scans: &[ScanDetail],
        ctx: &SelectionContext,
        sources: &mut NominationSources<'_>,
        stats: &dyn ISignalStatistics,
    ) -> NetselResult<SelectionOutcome> {
        let span = info_span!("netsel.selection", scorer = %self.scorer, scans = scans.len());
        let _guard = span.enter();

        let mut registry = CandidateRegistry::new();
        if ctx.nomination.connected {
            registry.set_current(ctx.nomination.current_network_id, ctx.nomination.current_bssid);
        }
        let mut faults = FaultLog::new(self.config.registry.fault_policy);
        let decay = self.last_selection_decay;

        for nominator in &self.nominators {
            let priority = nominator.id().priority();
            let mut aborted: Option<NetselError> = None;
            nominator.nominate(scans, &ctx.nomination, sources, &mut |scan, config| {
                if aborted.is_some() {
                    return;
                }
                let attributes = CandidateAttributes {
                    last_selection_weight: ctx
                        .last_user_selection
                        .map_or(0.0, |s| s.weight_for(config.network_id, ctx.now, decay)),
                    is_metered: config.metered,
                    historical_signal_stats: scan
                        .parse_bssid()
                        .ok()
                        .and_then(|bssid| stats.get_signal_statistics(&bssid)),
                };
                if let Err(e) = registry.add_with(scan, config, priority, 0, &attributes, &mut faults) {
                    aborted = Some(e);
                }
            });
            if let Some(e) = aborted {
                return Err(e);
            }
            debug!(nominator = %nominator, candidates = registry.size(), "nominator finished");
        }

        let groups = registry.grouped_candidates();
        let scorer = Scorer::new(self.scorer, &self.config.scoring);
        let winners = scorer.score_groups(&groups);
        let best = best_of(&winners);
        let best_is_current_bssid = best.candidate.as_ref().is_some_and(|c| c.is_current_bssid);

        info!(
            candidates = registry.size(),
            groups = groups.len(),
            faults = faults.count(),
            best = ?best.candidate.as_ref().map(|c| c.key.match_info.to_string()),
            value = best.value,
            stay = best_is_current_bssid,
            "selection complete"
        );

        Ok(SelectionOutcome {
            winners,
            best,
            best_is_current_bssid,
            candidate_count: registry.size(),
            fault_count: faults.count(),
            last_fault: faults.last().cloned(),
        })
    }
}
