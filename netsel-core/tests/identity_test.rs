use netsel_core::identity::{MacAddress, MatchInfo, SecurityType};

#[test]
fn mac_parse_rejects_malformed_input() {
    for bad in ["", "00:11:22:33:44", "00:11:22:33:44:55:66", "0g:11:22:33:44:55", "001:1:22:33:44:55", "+a:+b:cc:dd:ee:ff", "-1:00:00:00:00:00"] {
        let err = MacAddress::parse(bad).unwrap_err();
        assert_eq!(err.input, bad);
    }
}

#[test]
fn mac_display_is_lowercase() {
    let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
    assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
    assert_eq!(mac.as_bytes(), &[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
}

#[test]
fn mac_deserialization_rejects_garbage() {
    let ok: MacAddress = serde_json::from_str("\"01:02:03:04:05:06\"").unwrap();
    assert_eq!(ok, MacAddress::new([1, 2, 3, 4, 5, 6]));
    assert!(serde_json::from_str::<MacAddress>("\"not-a-mac\"").is_err());
}

#[test]
fn match_info_differs_on_security() {
    assert_ne!(
        MatchInfo::new("home", SecurityType::Psk),
        MatchInfo::new("home", SecurityType::Eap)
    );
}
