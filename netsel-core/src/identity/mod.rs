//! Network identity: security classification, BSSIDs, and the (SSID, security)
//! match key shared by scans and stored configs.

pub mod mac_address;
pub mod match_info;
pub mod security;

pub use mac_address::{MacAddress, MacParseError};
pub use match_info::MatchInfo;
pub use security::{KeyMgmt, SecurityType};
