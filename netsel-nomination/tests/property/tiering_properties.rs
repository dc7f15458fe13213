use netsel_core::identity::SecurityType;
use netsel_core::models::AppId;
use netsel_nomination::suggestion::{highest_priority_per_app, SuggestionMatch};
use proptest::prelude::*;
use test_fixtures::{config, scan};

proptest! {
    #[test]
    fn survivors_are_exactly_each_apps_top_tier(entries in prop::collection::vec((0u32..4, -3i32..4), 0..30)) {
        let scan = scan("net", "00:00:00:00:00:01", SecurityType::Open);
        let network = config(1, "net", SecurityType::Open);
        let matches: Vec<SuggestionMatch<'_>> = entries
            .iter()
            .map(|&(uid, priority)| SuggestionMatch {
                scan: &scan,
                app: AppId::new(uid, format!("app{uid}")),
                priority,
                config: network.clone(),
                passpoint: None,
            })
            .collect();

        let survivors = highest_priority_per_app(matches);
        for uid in 0u32..4 {
            let top = entries.iter().filter(|(u, _)| *u == uid).map(|(_, p)| *p).max();
            let expected = entries.iter().filter(|(u, p)| *u == uid && Some(*p) == top).count();
            let kept: Vec<i32> = survivors.iter().filter(|m| m.app.uid == uid).map(|m| m.priority).collect();
            prop_assert_eq!(kept.len(), expected);
            prop_assert!(kept.iter().all(|p| Some(*p) == top));
        }
    }
}
