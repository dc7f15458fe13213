use netsel_core::identity::SecurityType;
use netsel_registry::{CandidateRegistry, FaultLog};
use proptest::prelude::*;
use test_fixtures::{config, scan};

/// (network index, bssid index, priority, score)
fn arb_nominations() -> impl Strategy<Value = Vec<(usize, u8, u32, i32)>> {
    prop::collection::vec((0usize..3, 0u8..4, 0u32..3, -5i32..5), 0..40)
}

const NETWORKS: [(&str, SecurityType); 3] = [
    ("home", SecurityType::Psk),
    ("cafe", SecurityType::Open),
    ("office", SecurityType::Eap),
];

fn fill(nominations: &[(usize, u8, u32, i32)]) -> CandidateRegistry {
    let mut registry = CandidateRegistry::new();
    let mut faults = FaultLog::picky();
    for &(net, b, priority, score) in nominations {
        let (ssid, security) = NETWORKS[net];
        let observed = scan(ssid, &format!("00:00:00:00:00:{b:02x}"), security);
        registry
            .add(&observed, &config(net as i32, ssid, security), priority, score, &mut faults)
            .unwrap();
    }
    registry
}

proptest! {
    #[test]
    fn grouping_is_exhaustive(nominations in arb_nominations()) {
        let registry = fill(&nominations);
        let groups = registry.grouped_candidates();
        let total: usize = groups.iter().map(Vec::len).sum();
        prop_assert_eq!(total, registry.size());
        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(group.iter().all(|c| c.network_id() == group[0].network_id()));
        }
        let mut ids: Vec<i32> = groups.iter().map(|g| g[0].network_id()).collect();
        ids.dedup();
        prop_assert_eq!(ids.len(), groups.len());
    }

    #[test]
    fn survivor_is_best_by_priority_then_score(nominations in arb_nominations()) {
        let registry = fill(&nominations);
        for candidate in registry.candidates() {
            let best = nominations
                .iter()
                .filter(|(net, b, _, _)| {
                    *net as i32 == candidate.network_id() && candidate.bssid().as_bytes()[5] == *b
                })
                .map(|&(_, _, p, s)| (p, -s))
                .min()
                .unwrap();
            prop_assert_eq!((candidate.evaluator_priority, -candidate.evaluator_score), best);
        }
    }

    #[test]
    fn insertion_order_does_not_change_survivors(nominations in arb_nominations()) {
        let forward = fill(&nominations);
        let mut reversed_input = nominations.clone();
        reversed_input.reverse();
        let reversed = fill(&reversed_input);

        prop_assert_eq!(forward.size(), reversed.size());
        for candidate in forward.candidates() {
            let other = reversed.get(&candidate.key).unwrap();
            prop_assert_eq!(other.evaluator_priority, candidate.evaluator_priority);
            prop_assert_eq!(other.evaluator_score, candidate.evaluator_score);
        }
    }
}
