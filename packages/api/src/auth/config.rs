//! Front-end configuration from environment variables.
//!
//! The wasm bundle has no process environment, so the browser build bakes the
//! values in at compile time with [`AuthConfig::from_build_env`]. Native builds
//! read them at runtime (after loading `.env`) with `AuthConfig::from_env`.

use url::Url;

use super::Provider;
use crate::error::AuthError;

pub const API_URL_VAR: &str = "DEVBLOGG_API_URL";
pub const GITHUB_CLIENT_ID_VAR: &str = "DEVBLOGG_GITHUB_CLIENT_ID";
pub const GOOGLE_CLIENT_ID_VAR: &str = "DEVBLOGG_GOOGLE_CLIENT_ID";

/// Backend used when `DEVBLOGG_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend location and OAuth client ids.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub api_base_url: Url,
    pub github_client_id: Option<String>,
    pub google_client_id: Option<String>,
}

impl AuthConfig {
    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = Url::parse(&api_url).map_err(|source| AuthError::InvalidConfiguration {
            variable: API_URL_VAR,
            source,
        })?;

        Ok(Self {
            api_base_url,
            github_client_id: non_empty(GITHUB_CLIENT_ID_VAR),
            google_client_id: non_empty(GOOGLE_CLIENT_ID_VAR),
        })
    }

    /// Values captured by `option_env!` when the crate was compiled.
    pub fn from_build_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| {
            match key {
                API_URL_VAR => option_env!("DEVBLOGG_API_URL"),
                GITHUB_CLIENT_ID_VAR => option_env!("DEVBLOGG_GITHUB_CLIENT_ID"),
                GOOGLE_CLIENT_ID_VAR => option_env!("DEVBLOGG_GOOGLE_CLIENT_ID"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Runtime environment, with `.env` loaded first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// OAuth client id for `provider`, or the error the login view alerts.
    pub fn client_id(&self, provider: Provider) -> Result<&str, AuthError> {
        let id = match provider {
            Provider::GitHub => self.github_client_id.as_deref(),
            Provider::Google => self.google_client_id.as_deref(),
        };
        id.ok_or(AuthError::MissingClientConfiguration {
            provider,
            variable: provider.client_id_var(),
        })
    }
}
