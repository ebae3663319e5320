use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Host of the Microsoft identity platform.
pub const MICROSOFT_LOGIN_HOST: &str = "https://login.microsoftonline.com";

/// Identifier issued by the identity provider for an application registration.
///
/// The format is provider-defined and the value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Token-issuing authority of the identity provider.
///
/// Stored as the literal string so that it reaches the identity library unmodified;
/// use [`Authority::parse`] to inspect it as a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(String);

impl Authority {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Builds the Microsoft identity platform authority for a tenant (directory id,
    /// verified domain, or one of `common`, `organizations`, `consumers`).
    pub fn for_tenant(tenant: &str) -> Result<Self, ConfigError> {
        let tenant = tenant.trim();
        if tenant.is_empty() {
            return Err(ConfigError::invalid("authority", "tenant must not be empty"));
        }

        let mut url =
            Url::parse(MICROSOFT_LOGIN_HOST).map_err(|e| ConfigError::invalid("authority", e))?;
        url.path_segments_mut()
            .map_err(|_| ConfigError::invalid("authority", "login host cannot carry a path"))?
            .clear()
            .push(tenant);

        Ok(Self(url.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Result<Url, url::ParseError> {
        self.0.parse()
    }

    /// The tenant path segment, if the authority is a well-formed URL carrying one.
    pub fn tenant(&self) -> Option<String> {
        self.parse()
            .ok()?
            .path_segments()?
            .next()
            .filter(|segment| !segment.is_empty())
            .map(ToOwned::to_owned)
    }
}

impl From<&str> for Authority {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where the provider sends the browser back after authentication. Must match a URI
/// registered with the provider exactly, so it is never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectUri(String);

impl RedirectUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Result<Url, url::ParseError> {
        self.0.parse()
    }
}

impl From<&str> for RedirectUri {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RedirectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The `auth` section: client registration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientOptions {
    pub client_id: ClientId,
    pub authority: Authority,
    pub redirect_uri: RedirectUri,
}

impl ClientOptions {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.as_str().trim().is_empty() {
            return Err(ConfigError::invalid("client id", "must not be empty"));
        }

        let authority = self
            .authority
            .parse()
            .map_err(|e| ConfigError::invalid("authority", e))?;
        if authority.scheme() != "https" {
            return Err(ConfigError::invalid(
                "authority",
                format!("scheme must be https, found {}", authority.scheme()),
            ));
        }
        if authority.host_str().is_none() {
            return Err(ConfigError::invalid("authority", "missing host"));
        }
        if self.authority.tenant().is_none() {
            return Err(ConfigError::invalid("authority", "missing tenant path segment"));
        }

        let redirect = self
            .redirect_uri
            .parse()
            .map_err(|e| ConfigError::invalid("redirect uri", e))?;
        if redirect.host_str().is_none() {
            return Err(ConfigError::invalid("redirect uri", "missing host"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn options() -> ClientOptions {
        ClientOptions {
            client_id: "989fb1e4-afa5-4d39-af9b-5345307ed12d".into(),
            authority: "https://login.microsoftonline.com/9f119962-8c62-431c-a8ef-e7e0a42d11fc"
                .into(),
            redirect_uri: "http://localhost:8080/".into(),
        }
    }

    #[test]
    fn authority_for_tenant() {
        let authority = Authority::for_tenant("9f119962-8c62-431c-a8ef-e7e0a42d11fc").unwrap();
        assert_eq!(
            authority.as_str(),
            "https://login.microsoftonline.com/9f119962-8c62-431c-a8ef-e7e0a42d11fc"
        );
        assert_eq!(
            authority.tenant().as_deref(),
            Some("9f119962-8c62-431c-a8ef-e7e0a42d11fc")
        );
    }

    #[test]
    fn authority_for_tenant_encodes_segment() {
        let authority = Authority::for_tenant("contoso/evil").unwrap();
        assert_eq!(
            authority.as_str(),
            "https://login.microsoftonline.com/contoso%2Fevil"
        );
    }

    #[test]
    fn authority_for_blank_tenant() {
        assert!(matches!(
            Authority::for_tenant("  "),
            Err(ConfigError::Invalid { field: "authority", .. })
        ));
    }

    #[test]
    fn authority_without_tenant() {
        assert_eq!(Authority::from("https://login.microsoftonline.com/").tenant(), None);
        assert_eq!(Authority::from("not a url").tenant(), None);
    }

    #[test]
    fn valid_options() {
        options().validate().unwrap();
    }

    #[test]
    fn blank_client_id() {
        let mut options = options();
        options.client_id = ClientId::new(" ");
        assert!(matches!(
            options.validate(),
            Err(ConfigError::Invalid { field: "client id", .. })
        ));
    }

    #[test]
    fn insecure_authority() {
        let mut options = options();
        options.authority = "http://login.microsoftonline.com/common".into();
        assert!(matches!(
            options.validate(),
            Err(ConfigError::Invalid { field: "authority", .. })
        ));
    }

    #[test]
    fn relative_redirect_uri() {
        let mut options = options();
        options.redirect_uri = "/callback".into();
        assert!(matches!(
            options.validate(),
            Err(ConfigError::Invalid { field: "redirect uri", .. })
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(options()).unwrap();
        assert_eq!(json["clientId"], "989fb1e4-afa5-4d39-af9b-5345307ed12d");
        assert_eq!(json["redirectUri"], "http://localhost:8080/");
    }
}
