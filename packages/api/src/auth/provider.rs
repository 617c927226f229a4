//! # OAuth providers
//!
//! [`Provider`] enumerates the identity services the login page offers. Each
//! variant carries its static OAuth metadata:
//!
//! | | GitHub | Google |
//! |-|--------|--------|
//! | Authorize endpoint | `github.com/login/oauth/authorize` | `accounts.google.com/o/oauth2/v2/auth` |
//! | Scopes | `user:email` | `openid email profile` |
//! | Extra params | — | `prompt=consent`, `access_type=offline` |
//! | Backend exchange | `/api/auth/github/` | `/api/auth/google/` |
//! | Client id variable | `DEVBLOGG_GITHUB_CLIENT_ID` | `DEVBLOGG_GOOGLE_CLIENT_ID` |
//!
//! [`resolve_provider`] decides which provider issued a callback code.

use serde::{Deserialize, Serialize};

/// Provider used when a callback carries no recognizable hint.
pub const DEFAULT_PROVIDER: Provider = Provider::GitHub;

/// Third-party identity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    GitHub,
    Google,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::GitHub, Provider::Google];

    /// Wire name, used for `state`, the stored hint and backend routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::GitHub => "github",
            Provider::Google => "google",
        }
    }

    /// Human-readable name for buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::GitHub => "GitHub",
            Provider::Google => "Google",
        }
    }

    pub fn authorize_endpoint(&self) -> &'static str {
        match self {
            Provider::GitHub => "https://github.com/login/oauth/authorize",
            Provider::Google => "https://accounts.google.com/o/oauth2/v2/auth",
        }
    }

    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            Provider::GitHub => &["user:email"],
            Provider::Google => &["openid", "email", "profile"],
        }
    }

    /// Provider-specific authorize parameters beyond the standard ones.
    pub fn extra_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Provider::GitHub => &[],
            Provider::Google => &[("prompt", "consent"), ("access_type", "offline")],
        }
    }

    /// Backend route that trades an authorization code for tokens.
    pub fn exchange_endpoint(&self) -> &'static str {
        match self {
            Provider::GitHub => "/api/auth/github/",
            Provider::Google => "/api/auth/google/",
        }
    }

    /// Environment variable holding the OAuth client id.
    pub fn client_id_var(&self) -> &'static str {
        match self {
            Provider::GitHub => super::GITHUB_CLIENT_ID_VAR,
            Provider::Google => super::GOOGLE_CLIENT_ID_VAR,
        }
    }

    /// Match an exact wire name. Anything else is unrecognized.
    pub fn recognize(value: Option<&str>) -> Option<Provider> {
        value.and_then(|v| v.parse().ok())
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl std::str::FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Provider::GitHub),
            "google" => Ok(Provider::Google),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

/// Where a resolved provider came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderSource {
    /// Echoed back by the provider in `state`.
    State,
    /// Saved in the session before leaving for the provider.
    Stored,
    /// Nothing usable; [`DEFAULT_PROVIDER`] was assumed.
    Default,
}

/// Pick the provider for a callback: `state` first, then the stored hint,
/// then [`DEFAULT_PROVIDER`].
pub fn resolve_provider(state: Option<&str>, stored: Option<&str>) -> (Provider, ProviderSource) {
    if let Some(provider) = Provider::recognize(state) {
        return (provider, ProviderSource::State);
    }
    if let Some(provider) = Provider::recognize(stored) {
        return (provider, ProviderSource::Stored);
    }
    tracing::warn!(
        ?state,
        ?stored,
        "No recognized provider in callback, assuming {}",
        DEFAULT_PROVIDER
    );
    (DEFAULT_PROVIDER, ProviderSource::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_roundtrip() {
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>(), Ok(provider));
            assert_eq!(
                serde_json::to_string(&provider).unwrap(),
                format!("\"{}\"", provider.as_str())
            );
        }
        assert!("GitHub".parse::<Provider>().is_err());
        assert!("".parse::<Provider>().is_err());
    }

    #[test]
    fn test_client_id_var_matches_config() {
        assert_eq!(Provider::GitHub.client_id_var(), super::super::GITHUB_CLIENT_ID_VAR);
        assert_eq!(Provider::Google.client_id_var(), super::super::GOOGLE_CLIENT_ID_VAR);
    }

    #[test]
    fn test_state_wins_over_stored() {
        assert_eq!(
            resolve_provider(Some("google"), Some("github")),
            (Provider::Google, ProviderSource::State)
        );
    }

    #[test]
    fn test_stored_used_when_state_missing_or_unknown() {
        assert_eq!(
            resolve_provider(None, Some("github")),
            (Provider::GitHub, ProviderSource::Stored)
        );
        assert_eq!(
            resolve_provider(Some("a1b2c3"), Some("google")),
            (Provider::Google, ProviderSource::Stored)
        );
    }

    #[test]
    fn test_default_when_nothing_recognized() {
        assert_eq!(
            resolve_provider(None, None),
            (Provider::GitHub, ProviderSource::Default)
        );
        assert_eq!(
            resolve_provider(Some("gitlab"), Some("facebook")),
            (Provider::GitHub, ProviderSource::Default)
        );
    }

    #[test]
    fn test_exchange_endpoints() {
        assert_eq!(Provider::GitHub.exchange_endpoint(), "/api/auth/github/");
        assert_eq!(Provider::Google.exchange_endpoint(), "/api/auth/google/");
    }
}
