//! API token resolution. Tokens are resolved once per process.

use std::fmt;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "WB_COMMUNICATIONS_OAUTH_TOKEN";
pub const RETURNS_API_KEY_ENV: &str = "WB_RETURNS_OAUTH_TOKEN";

/// Token sent verbatim as the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***{} chars)", self.0.len())
    }
}

/// Token scope an operation needs. Claims live on a separate host and may
/// need a token with the returns category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScope {
    Communications,
    Returns,
}

impl CredentialScope {
    pub fn env_var(self) -> &'static str {
        match self {
            CredentialScope::Communications => API_KEY_ENV,
            CredentialScope::Returns => RETURNS_API_KEY_ENV,
        }
    }

    pub fn cli_flag(self) -> &'static str {
        match self {
            CredentialScope::Communications => "--apiKey",
            CredentialScope::Returns => "--returnsApiKey",
        }
    }
}

/// Loads `KEY=value` lines from `path`, or from the nearest `.env` when no
/// path is given, into the process environment. Variables that are already
/// set keep their value. Returns the file that was read.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(p) => dotenvy::from_path(p).ok().map(|()| p.to_owned()),
        None => dotenvy::dotenv().ok(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    communications: Option<ApiKey>,
    returns: Option<ApiKey>,
}

impl Credentials {
    pub fn new(communications: Option<ApiKey>, returns: Option<ApiKey>) -> Self {
        Self { communications, returns }
    }

    /// Environment first, then the command-line value.
    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        cli_api_key: Option<String>,
        cli_returns_api_key: Option<String>,
    ) -> Self {
        let pick = |var: &str, cli: Option<String>| env(var).and_then(ApiKey::new).or_else(|| cli.and_then(ApiKey::new));
        Self {
            communications: pick(API_KEY_ENV, cli_api_key),
            returns: pick(RETURNS_API_KEY_ENV, cli_returns_api_key),
        }
    }

    pub fn from_process(cli_api_key: Option<String>, cli_returns_api_key: Option<String>) -> Self {
        Self::resolve(|k| std::env::var(k).ok(), cli_api_key, cli_returns_api_key)
    }

    /// Returns-scope falls back to the communications token.
    pub fn for_scope(&self, scope: CredentialScope) -> Option<&ApiKey> {
        match scope {
            CredentialScope::Communications => self.communications.as_ref(),
            CredentialScope::Returns => self.returns.as_ref().or(self.communications.as_ref()),
        }
    }

    pub fn missing_message(scope: CredentialScope) -> String {
        format!(
            "API key is required. Please set {} environment variable or provide {}=<token> argument.",
            scope.env_var(),
            scope.cli_flag(),
        )
    }
}
