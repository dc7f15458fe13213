use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use netsel_core::identity::{MacAddress, MatchInfo, SecurityType};
use netsel_core::models::CandidateKey;
use proptest::prelude::*;

fn arb_security() -> impl Strategy<Value = SecurityType> {
    prop_oneof![
        Just(SecurityType::Open),
        Just(SecurityType::Wep),
        Just(SecurityType::Psk),
        Just(SecurityType::Eap),
    ]
}

fn arb_key() -> impl Strategy<Value = CandidateKey> {
    ("[a-c]{1,2}", arb_security(), 0u8..3, 0i32..3).prop_map(|(ssid, sec, last, id)| {
        CandidateKey::new(
            MatchInfo::new(&ssid, sec),
            MacAddress::new([0, 0x11, 0x22, 0x33, 0x44, last]),
            id,
        )
    })
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn key_equality_is_fieldwise(a in arb_key(), b in arb_key()) {
        let fieldwise = a.match_info == b.match_info
            && a.bssid == b.bssid
            && a.network_id == b.network_id;
        prop_assert_eq!(a == b, fieldwise);
    }

    #[test]
    fn equal_keys_hash_equally(a in arb_key(), b in arb_key()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn mac_display_parses_back(bytes in any::<[u8; 6]>()) {
        let mac = MacAddress::new(bytes);
        prop_assert_eq!(MacAddress::parse(&mac.to_string()).unwrap(), mac);
        prop_assert_eq!(MacAddress::parse(&mac.to_string().to_uppercase()).unwrap(), mac);
    }
}
