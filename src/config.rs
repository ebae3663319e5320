//! Deploy-time overrides for the authentication configuration.
//!
//! Identifiers are read from the environment so they need not be baked into the build.
//! Anything left unset keeps its built-in default.

use tracing::{debug, warn};

use crate::{
    core::{
        cache::CacheLocation,
        client::{Authority, ClientId, RedirectUri},
        configuration::AuthConfiguration,
        scopes::{LoginRequest, Scopes},
    },
    error::ConfigError,
};

pub const CLIENT_ID: &str = "MS_CLIENT_ID";
/// Accepted when [`CLIENT_ID`] is unset.
pub const CLIENT_ID_FALLBACK: &str = "CLIENT_ID";
/// Full authority URL. Takes precedence over [`TENANT_ID`].
pub const AUTHORITY: &str = "MS_AUTHORITY";
pub const TENANT_ID: &str = "MS_TENANT_ID";
pub const REDIRECT_URI: &str = "ENV_REDIRECT_URI";
pub const CACHE_LOCATION: &str = "AUTH_CACHE_LOCATION";
pub const STORE_AUTH_STATE_IN_COOKIE: &str = "AUTH_STORE_STATE_IN_COOKIE";
/// Whitespace separated list of scopes.
pub const SCOPES: &str = "GRAPH_SCOPE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub auth: AuthConfiguration,
    pub login_request: LoginRequest,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        let auth = &mut config.auth.auth;
        let cache = &mut config.auth.cache;

        if let Some(id) = get(CLIENT_ID) {
            debug!("client id set from {CLIENT_ID}");
            auth.client_id = ClientId::new(id);
        } else if let Some(id) = get(CLIENT_ID_FALLBACK) {
            warn!("{CLIENT_ID} is unset, using {CLIENT_ID_FALLBACK}");
            auth.client_id = ClientId::new(id);
        }

        if let Some(authority) = get(AUTHORITY) {
            debug!("authority set from {AUTHORITY}");
            auth.authority = Authority::new(authority);
        } else if let Some(tenant) = get(TENANT_ID) {
            debug!("authority derived from {TENANT_ID}");
            auth.authority =
                Authority::for_tenant(&tenant).map_err(|e| env_error(TENANT_ID, e))?;
        }

        if let Some(uri) = get(REDIRECT_URI) {
            debug!("redirect uri set from {REDIRECT_URI}");
            auth.redirect_uri = RedirectUri::new(uri);
        }

        if let Some(location) = get(CACHE_LOCATION) {
            cache.cache_location = location
                .parse::<CacheLocation>()
                .map_err(|e| env_error(CACHE_LOCATION, e))?;
            debug!("cache location set to {}", cache.cache_location);
        }

        if let Some(flag) = get(STORE_AUTH_STATE_IN_COOKIE) {
            cache.store_auth_state_in_cookie = parse_bool(&flag).ok_or_else(|| {
                env_error(
                    STORE_AUTH_STATE_IN_COOKIE,
                    format!("`{flag}` is not a boolean"),
                )
            })?;
        }

        if let Some(scopes) = get(SCOPES) {
            let scopes =
                Scopes::from_space_delimited(&scopes).map_err(|e| env_error(SCOPES, e))?;
            debug!("requesting scopes: {}", scopes.to_space_delimited());
            config.login_request = LoginRequest::new(scopes);
        }

        Ok(config)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn env_error(var: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Env {
        var,
        reason: reason.to_string(),
    }
}
