//! # OAuth callback
//!
//! The provider sends the browser back to `/auth/callback?code=...&state=...`.
//! [`handle_callback`] drives the exchange through these states:
//!
//! ```text
//! Initializing ──(no code)──────────────► MissingCode
//!      │
//!      └─► Exchanging(provider) ──ok────► Success
//!                               └─err───► Failed(message)
//! ```
//!
//! The provider comes from [`resolve_provider`]. Codes are single-use at the
//! provider, so a failed exchange is terminal and never retried. After
//! `Success` the view waits [`LANDING_DELAY`] and navigates to the landing page.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, Session};
use url::form_urlencoded;

use super::login::TokenPair;
use super::{resolve_provider, Provider, ProviderSource};
use crate::client::Backend;
use crate::error::AuthError;

/// Pause between showing success and leaving the callback page.
pub const LANDING_DELAY: Duration = Duration::from_secs(1);

/// Query parameters of the callback route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

impl CallbackParams {
    /// Parse a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "code" if params.code.is_none() => params.code = Some(value.into_owned()),
                "state" if params.state.is_none() => params.state = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// Prefer the undecoded `location.search`. The router hands over the
    /// query already percent-decoded, so an encoded `&` or `=` inside the code
    /// would split it; `routed` is only used when there is no raw query.
    pub fn from_location(raw_search: Option<&str>, routed: &str) -> Self {
        Self::from_query(raw_search.unwrap_or(routed))
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }
}

/// What the callback page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackStatus {
    Initializing,
    MissingCode,
    Exchanging(Provider),
    Success,
    Failed(String),
}

impl CallbackStatus {
    pub fn message(&self) -> String {
        match self {
            CallbackStatus::Initializing | CallbackStatus::Exchanging(_) => "Processing...".to_string(),
            CallbackStatus::MissingCode => AuthError::MissingAuthorizationCode.to_string(),
            CallbackStatus::Success => "Login success!".to_string(),
            CallbackStatus::Failed(message) => format!("Error: {message}"),
        }
    }
}

#[derive(Serialize)]
struct ExchangeRequest<'a> {
    code: &'a str,
}

/// A code ready to be traded for tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExchange {
    pub provider: Provider,
    pub source: ProviderSource,
    pub code: String,
}

impl CodeExchange {
    /// Extract the code and pick the provider. No network access.
    pub fn from_callback<S: KeyValueStore>(
        params: &CallbackParams,
        session: &Session<S>,
    ) -> Result<Self, AuthError> {
        let code = params.code().ok_or(AuthError::MissingAuthorizationCode)?;
        let stored = session.provider();
        let (provider, source) = resolve_provider(params.state.as_deref(), stored.as_deref());
        Ok(Self {
            provider,
            source,
            code: code.to_string(),
        })
    }

    pub fn endpoint(&self) -> &'static str {
        self.provider.exchange_endpoint()
    }

    /// POST the code to the provider's endpoint and store the tokens.
    pub async fn exchange<B, S>(&self, backend: &B, session: &Session<S>) -> Result<TokenPair, AuthError>
    where
        B: Backend,
        S: KeyValueStore,
    {
        let tokens: TokenPair = backend
            .post(self.endpoint(), &ExchangeRequest { code: &self.code })
            .await?;
        tokens.persist(session);
        Ok(tokens)
    }
}

/// Run the whole callback, reporting each state to `on_status`. Returns the
/// terminal state. Tokens are stored before `Success` is reported.
pub async fn handle_callback<B, S, F>(
    backend: &B,
    session: &Session<S>,
    params: &CallbackParams,
    mut on_status: F,
) -> CallbackStatus
where
    B: Backend,
    S: KeyValueStore,
    F: FnMut(&CallbackStatus),
{
    on_status(&CallbackStatus::Initializing);

    let exchange = match CodeExchange::from_callback(params, session) {
        Ok(exchange) => exchange,
        Err(e) => {
            tracing::warn!("OAuth callback rejected: {e}");
            let status = CallbackStatus::MissingCode;
            on_status(&status);
            return status;
        }
    };

    on_status(&CallbackStatus::Exchanging(exchange.provider));
    tracing::info!(
        provider = %exchange.provider,
        source = ?exchange.source,
        "Exchanging OAuth code"
    );

    let status = match exchange.exchange(backend, session).await {
        Ok(_) => CallbackStatus::Success,
        Err(e) => {
            tracing::error!("{} OAuth exchange failed: {e}", exchange.provider.label());
            CallbackStatus::Failed(e.user_message())
        }
    };
    on_status(&status);
    status
}
