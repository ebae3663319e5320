use serde::{Deserialize, Serialize};

use super::{
    cache::{CacheLocation, CacheOptions},
    client::{Authority, ClientId, ClientOptions, RedirectUri},
    scopes::{LoginRequest, Scopes},
};
use crate::error::ConfigError;

pub const DEFAULT_CLIENT_ID: &str = "989fb1e4-afa5-4d39-af9b-5345307ed12d";
pub const DEFAULT_AUTHORITY: &str =
    "https://login.microsoftonline.com/9f119962-8c62-431c-a8ef-e7e0a42d11fc";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/";
pub const DEFAULT_CACHE_LOCATION: CacheLocation = CacheLocation::SessionStorage;
pub const DEFAULT_STORE_AUTH_STATE_IN_COOKIE: bool = false;
pub const DEFAULT_SCOPE: &str = "User.Read";

/// Configuration handed to an MSAL-compatible public client at initialization.
///
/// Serializes to the shape the identity library expects:
///
/// ```json
/// {
///   "auth": { "clientId": "...", "authority": "...", "redirectUri": "..." },
///   "cache": { "cacheLocation": "sessionStorage", "storeAuthStateInCookie": false }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfiguration {
    pub auth: ClientOptions,
    pub cache: CacheOptions,
}

impl AuthConfiguration {
    pub fn client_id(&self) -> &ClientId {
        &self.auth.client_id
    }

    pub fn authority_url(&self) -> &Authority {
        &self.auth.authority
    }

    pub fn redirect_uri(&self) -> &RedirectUri {
        &self.auth.redirect_uri
    }

    pub fn cache_location(&self) -> CacheLocation {
        self.cache.cache_location
    }

    pub fn store_auth_state_in_cookie(&self) -> bool {
        self.cache.store_auth_state_in_cookie
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "auth": {
                "clientId": self.auth.client_id.as_str(),
                "authority": self.auth.authority.as_str(),
                "redirectUri": self.auth.redirect_uri.as_str(),
            },
            "cache": {
                "cacheLocation": self.cache.cache_location.as_str(),
                "storeAuthStateInCookie": self.cache.store_auth_state_in_cookie,
            },
        })
    }

    /// Parses a configuration document. Unknown fields are rejected and errors carry the
    /// path of the offending field.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let de = &mut serde_json::Deserializer::from_str(s);
        serde_path_to_error::deserialize(de).map_err(ConfigError::from_path_error)
    }

    /// Checks that the values are usable by an identity provider.
    ///
    /// Nothing in this crate calls this implicitly: values are otherwise passed through
    /// as-is and malformed ones surface in the identity library.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()
    }
}

impl Default for AuthConfiguration {
    fn default() -> Self {
        Self {
            auth: ClientOptions {
                client_id: ClientId::new(DEFAULT_CLIENT_ID),
                authority: Authority::new(DEFAULT_AUTHORITY),
                redirect_uri: RedirectUri::new(DEFAULT_REDIRECT_URI),
            },
            cache: CacheOptions {
                cache_location: DEFAULT_CACHE_LOCATION,
                store_auth_state_in_cookie: DEFAULT_STORE_AUTH_STATE_IN_COOKIE,
            },
        }
    }
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self::new(Scopes::single_unchecked(DEFAULT_SCOPE))
    }
}

/// The application's authentication configuration.
///
/// Each call returns a fresh value; callers own what they get back.
pub fn auth_configuration() -> AuthConfiguration {
    AuthConfiguration::default()
}

/// Scopes requested on login and token acquisition.
pub fn login_request() -> LoginRequest {
    LoginRequest::default()
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_json() {
        assert_eq!(
            auth_configuration().to_json(),
            json!({
                "auth": {
                    "clientId": "989fb1e4-afa5-4d39-af9b-5345307ed12d",
                    "authority": "https://login.microsoftonline.com/9f119962-8c62-431c-a8ef-e7e0a42d11fc",
                    "redirectUri": "http://localhost:8080/"
                },
                "cache": {
                    "cacheLocation": "sessionStorage",
                    "storeAuthStateInCookie": false
                }
            })
        );
    }

    #[test]
    fn derived_serialization_matches_to_json() {
        let config = auth_configuration();
        assert_eq!(serde_json::to_value(&config).unwrap(), config.to_json());
    }

    #[test]
    fn defaults_are_valid() {
        auth_configuration().validate().unwrap();
        assert_eq!(
            auth_configuration().authority_url().tenant().as_deref(),
            Some("9f119962-8c62-431c-a8ef-e7e0a42d11fc")
        );
    }

    #[test]
    fn parse_keeps_values_verbatim() {
        let config = AuthConfiguration::from_json_str(
            r#"{
                "auth": {
                    "clientId": "",
                    "authority": "not a url",
                    "redirectUri": "HTTP://LOCALHOST:8080"
                },
                "cache": { "cacheLocation": "localStorage", "storeAuthStateInCookie": true }
            }"#,
        )
        .unwrap();

        assert_eq!(config.client_id().as_str(), "");
        assert_eq!(config.authority_url().as_str(), "not a url");
        assert_eq!(config.redirect_uri().as_str(), "HTTP://LOCALHOST:8080");
        assert_eq!(config.cache_location(), CacheLocation::LocalStorage);
        assert!(config.store_auth_state_in_cookie());
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_reports_field_path() {
        let err = AuthConfiguration::from_json_str(
            r#"{
                "auth": {
                    "clientId": "id",
                    "authority": "https://login.microsoftonline.com/common",
                    "redirectUri": "http://localhost:8080/"
                },
                "cache": { "cacheLocation": "cookieStorage", "storeAuthStateInCookie": false }
            }"#,
        )
        .unwrap_err();

        match err {
            ConfigError::Json { path, .. } => assert_eq!(path, "cache.cacheLocation"),
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn parse_rejects_missing_section() {
        let result = AuthConfiguration::from_json_str(
            r#"{ "auth": { "clientId": "id", "authority": "a", "redirectUri": "r" } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }
}
