use netsel_core::config::FaultPolicy;
use netsel_core::errors::{CandidateFault, NetselResult};
use tracing::warn;

/// Caller-owned fault accumulator for one or more registry passes.
///
/// Every fault is counted and the most recent one kept regardless of policy;
/// the policy only decides whether `record` returns it as an error.
#[derive(Debug, Clone, Default)]
pub struct FaultLog {
    policy: FaultPolicy,
    count: usize,
    last: Option<CandidateFault>,
}

impl FaultLog {
    pub fn new(policy: FaultPolicy) -> Self {
        Self {
            policy,
            count: 0,
            last: None,
        }
    }

    pub fn tolerant() -> Self {
        Self::new(FaultPolicy::Tolerant)
    }

    pub fn picky() -> Self {
        Self::new(FaultPolicy::Picky)
    }

    /// Record a fault. Tolerant: `Ok(false)`. Picky: the fault as an error.
    pub fn record(&mut self, fault: CandidateFault) -> NetselResult<bool> {
        self.count += 1;
        warn!(fault = %fault, count = self.count, "candidate fault");
        self.last = Some(fault.clone());
        match self.policy {
            FaultPolicy::Tolerant => Ok(false),
            FaultPolicy::Picky => Err(fault.into()),
        }
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last(&self) -> Option<&CandidateFault> {
        self.last.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Reset count and last fault, keeping the policy.
    pub fn clear(&mut self) {
        self.count = 0;
        self.last = None;
    }
}
