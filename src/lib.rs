//! Typed configuration for an OAuth 2.0 / OpenID Connect public client running in the
//! browser, in the shape expected by MSAL-compatible identity libraries.
//!
//! This crate does not implement the protocol. It produces two values, an
//! [`AuthConfiguration`] and a [`LoginRequest`], that are handed unmodified to the
//! identity library's initialization and login calls.
//!
//! # Usage
//!
//! ```ignore
//! use spa_auth_config::{auth_configuration, login_request};
//!
//! let config = auth_configuration();
//! let request = login_request();
//!
//! // Pass both to the identity client, e.g. across a JS boundary.
//! let msal_config = config.to_json();
//! let login = request.to_json();
//! client.initialize(msal_config, login)?;
//! ```
//!
//! Deployments that must not ship identifiers in the build can load them from the
//! environment instead:
//!
//! ```ignore
//! use spa_auth_config::config::Config;
//!
//! let Config { auth, login_request } = Config::from_env()?;
//! auth.validate()?;
//! ```
//!
//! # Configuration surface
//!
//! | Option | Effect |
//! |---|---|
//! | `clientId` | identifies the registered application to the provider |
//! | `authority` | issuer/tenant endpoint for token requests |
//! | `redirectUri` | post-authentication redirect target, must match the registration |
//! | `cacheLocation` | `sessionStorage` or `localStorage` |
//! | `storeAuthStateInCookie` | mirror auth state into a cookie |
//! | `scopes` | permissions requested at login |

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::{
    cache::{CacheLocation, CacheOptions},
    client::{Authority, ClientId, ClientOptions, RedirectUri},
    configuration::{auth_configuration, login_request, AuthConfiguration},
    scopes::{LoginRequest, Scopes},
};
pub use error::ConfigError;
