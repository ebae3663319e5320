/// Errors raised while loading, parsing or checking an authentication configuration.
///
/// The accessors in [`crate::core::configuration`] never fail; these errors only surface
/// from the JSON, environment and validation paths.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A JSON document did not match the expected shape.
    #[error("invalid configuration at `{path}`: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable was set to a value that cannot be used.
    #[error("environment variable {var} is invalid: {reason}")]
    Env { var: &'static str, reason: String },

    /// A configuration field failed validation.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// A scope list contained no scopes.
    #[error("at least one scope must be requested")]
    EmptyScopes,

    /// A scope was blank or contained whitespace.
    #[error("invalid scope `{0}`")]
    InvalidScope(String),
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            field,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn from_path_error(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        }
    }
}
