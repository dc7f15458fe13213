use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SYSTEM_PACKAGE, SYSTEM_UID};

use super::NetworkConfig;

/// Identity of an app (or the system) that created or suggested a network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppId {
    pub uid: u32,
    pub package: String,
}

impl AppId {
    pub fn new(uid: u32, package: impl Into<String>) -> Self {
        Self {
            uid,
            package: package.into(),
        }
    }

    pub fn system() -> Self {
        Self::new(SYSTEM_UID, SYSTEM_PACKAGE)
    }
}

impl Default for AppId {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.package, self.uid)
    }
}

/// A network suggested by an app, with the app's declared priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub config: NetworkConfig,
    pub app: AppId,
    /// Higher is preferred among the same app's suggestions.
    pub priority: i32,
    #[serde(default)]
    pub untrusted: bool,
}
