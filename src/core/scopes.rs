use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Ordered, non-empty set of permissions requested from the provider.
///
/// Order is preserved since some providers use it for the consent prompt. Duplicates
/// are dropped, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Scopes(Vec<String>);

impl Scopes {
    pub fn new(scope: impl Into<String>) -> Result<Self, ConfigError> {
        Self::try_from(vec![scope.into()])
    }

    /// For literals known to be a single well-formed scope.
    pub(crate) fn single_unchecked(scope: &str) -> Self {
        Self(vec![scope.to_owned()])
    }

    /// Parses the OAuth `scope` form: scopes separated by whitespace.
    pub fn from_space_delimited(s: &str) -> Result<Self, ConfigError> {
        Self::try_from(s.split_whitespace().map(ToOwned::to_owned).collect::<Vec<_>>())
    }

    pub fn to_space_delimited(&self) -> String {
        self.0.join(" ")
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.iter().any(|s| s == scope)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for Scopes {
    type Error = ConfigError;

    fn try_from(v: Vec<String>) -> Result<Self, Self::Error> {
        let mut scopes: Vec<String> = Vec::with_capacity(v.len());

        for scope in v {
            if scope.is_empty() || scope.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidScope(scope));
            }
            if scopes.contains(&scope) {
                warn!("dropping duplicate scope `{scope}`");
                continue;
            }
            scopes.push(scope);
        }

        if scopes.is_empty() {
            return Err(ConfigError::EmptyScopes);
        }

        Ok(Self(scopes))
    }
}

impl From<Scopes> for Vec<String> {
    fn from(Scopes(v): Scopes) -> Vec<String> {
        v
    }
}

impl AsRef<[String]> for Scopes {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl Deref for Scopes {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// Parameters passed to the identity library's login and token-acquisition calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub scopes: Scopes,
}

impl LoginRequest {
    pub fn new(scopes: Scopes) -> Self {
        Self { scopes }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "scopes": self.scopes.as_ref() })
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let de = &mut serde_json::Deserializer::from_str(s);
        serde_path_to_error::deserialize(de).map_err(ConfigError::from_path_error)
    }
}
