use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const SESSION_STORAGE: &str = "sessionStorage";
const LOCAL_STORAGE: &str = "localStorage";

/// Browser storage tier the identity library persists tokens and session state in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CacheLocation {
    /// Scoped to the browser tab; cleared when the session ends.
    #[default]
    SessionStorage,
    /// Survives across browser sessions.
    LocalStorage,
}

impl CacheLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheLocation::SessionStorage => SESSION_STORAGE,
            CacheLocation::LocalStorage => LOCAL_STORAGE,
        }
    }
}

impl FromStr for CacheLocation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SESSION_STORAGE => Ok(CacheLocation::SessionStorage),
            LOCAL_STORAGE => Ok(CacheLocation::LocalStorage),
            other => Err(ConfigError::invalid(
                "cache location",
                format!("expected `{SESSION_STORAGE}` or `{LOCAL_STORAGE}`, found `{other}`"),
            )),
        }
    }
}

impl TryFrom<String> for CacheLocation {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CacheLocation> for String {
    fn from(location: CacheLocation) -> Self {
        location.as_str().into()
    }
}

impl fmt::Display for CacheLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The `cache` section: how the identity library stores auth state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CacheOptions {
    pub cache_location: CacheLocation,
    /// Mirror transient auth state into a cookie, for browsers that restrict storage access.
    pub store_auth_state_in_cookie: bool,
}
