mod common;

use common::World;
use netsel_core::identity::SecurityType;
use netsel_core::models::{AppId, PasspointMatch, SelectionStatus};
use netsel_nomination::{NetworkNominator, NominationContext};
use test_fixtures::{passpoint_scan, provider, scan};

#[test]
fn sweeps_cache_even_without_scans() {
    let mut world = World::default();
    world.nominate(NetworkNominator::Passpoint, &[], &NominationContext::default());
    assert_eq!(world.passpoint.sweeps, 1);
}

#[test]
fn home_matches_are_processed_before_roaming() {
    let mut world = World::default();
    world
        .passpoint
        .add_match("RoamNet", provider("roam.example.com"), PasspointMatch::Roaming);
    world
        .passpoint
        .add_match("HomeNet", provider("home.example.com"), PasspointMatch::Home);
    let scans = vec![
        passpoint_scan("RoamNet", "00:00:00:00:00:01"),
        passpoint_scan("HomeNet", "00:00:00:00:00:02"),
        passpoint_scan("RoamNet", "00:00:00:00:00:03"),
    ];

    let found = world.nominate(NetworkNominator::Passpoint, &scans, &NominationContext::default());
    let bssids: Vec<&str> = found.iter().map(|(b, _)| b.as_str()).collect();
    assert_eq!(
        bssids,
        vec!["00:00:00:00:00:02", "00:00:00:00:00:01", "00:00:00:00:00:03"]
    );
    assert!(found[0].1.is_home_provider);
    assert!(!found[1].1.is_home_provider);
}

#[test]
fn provider_is_materialized_under_system_creator() {
    let mut world = World::default();
    world
        .passpoint
        .add_match("HomeNet", provider("home.example.com"), PasspointMatch::Home);
    let scans = vec![
        passpoint_scan("HomeNet", "00:00:00:00:00:01"),
        passpoint_scan("HomeNet", "00:00:00:00:00:02"),
    ];

    let found = world.nominate(NetworkNominator::Passpoint, &scans, &NominationContext::default());
    assert_eq!(found.len(), 2);
    assert_eq!(world.store.added.len(), 1);
    assert_eq!(world.store.added[0].1, AppId::system());
    let stored = world.store.network("home.example.comWPA_EAP").unwrap();
    assert_eq!(stored.plain_ssid(), "HomeNet");
    assert_eq!(found[1].1.network_id, stored.network_id);
}

#[test]
fn non_interworking_scans_are_ignored() {
    let mut world = World::default();
    world
        .passpoint
        .add_match("HomeNet", provider("home.example.com"), PasspointMatch::Home);
    let scans = vec![scan("HomeNet", "00:00:00:00:00:01", SecurityType::Eap)];
    assert!(world
        .nominate(NetworkNominator::Passpoint, &scans, &NominationContext::default())
        .is_empty());
}

#[test]
fn suggested_providers_are_left_to_suggestion_nominator() {
    let mut world = World::default();
    let mut suggested = provider("carrier.example.com");
    suggested.from_suggestion = true;
    world.passpoint.add_match("CarrierWiFi", suggested, PasspointMatch::Home);
    let scans = vec![passpoint_scan("CarrierWiFi", "00:00:00:00:00:01")];
    assert!(world
        .nominate(NetworkNominator::Passpoint, &scans, &NominationContext::default())
        .is_empty());
}

#[test]
fn disabled_existing_entry_that_cannot_reenable_is_skipped() {
    let mut world = World::default();
    let mut stored = provider("home.example.com").config;
    stored.set_plain_ssid("HomeNet");
    stored.selection_status = SelectionStatus::PermanentlyDisabled;
    let id = world.store.insert(stored);
    world.store.refuse_try_enable(id);
    world
        .passpoint
        .add_match("HomeNet", provider("home.example.com"), PasspointMatch::Home);

    let scans = vec![passpoint_scan("HomeNet", "00:00:00:00:00:01")];
    assert!(world
        .nominate(NetworkNominator::Passpoint, &scans, &NominationContext::default())
        .is_empty());
    assert!(world.store.added.is_empty());
}

#[test]
fn stored_provider_entry_takes_each_scans_ssid_and_match_kind() {
    let mut world = World::default();
    let shared = provider("carrier.example.com");
    world
        .passpoint
        .add_match("CarrierA", shared.clone(), PasspointMatch::Home);
    world
        .passpoint
        .add_match("CarrierB", shared, PasspointMatch::Roaming);
    let scans = vec![
        passpoint_scan("CarrierB", "00:00:00:00:00:02"),
        passpoint_scan("CarrierA", "00:00:00:00:00:01"),
    ];

    let found = world.nominate(NetworkNominator::Passpoint, &scans, &NominationContext::default());
    assert_eq!(world.store.added.len(), 1);
    let seen: Vec<(&str, bool)> = found
        .iter()
        .map(|(_, c)| (c.plain_ssid(), c.is_home_provider))
        .collect();
    assert_eq!(seen, vec![("CarrierA", true), ("CarrierB", false)]);
}
