//! Error types for the HTTP client and the authentication flows.

use serde_json::Value;
use thiserror::Error;

use crate::auth::Provider;

/// Failure of a single backend round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. Logged by the client, never retried.
    #[error("Unauthorized: {payload}")]
    Unauthorized { payload: Value },

    #[error("Request failed with status {status}: {payload}")]
    Server { status: u16, payload: Value },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Response body returned by the backend, if the request got that far.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Unauthorized { payload } | ApiError::Server { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Errors surfaced by the login and callback views.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing OAuth code in callback URL.")]
    MissingAuthorizationCode,

    #[error("Missing {variable}")]
    MissingClientConfiguration {
        provider: Provider,
        variable: &'static str,
    },

    #[error("Invalid {variable}: {source}")]
    InvalidConfiguration {
        variable: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl AuthError {
    /// Text shown to the user: the serialized server payload when there is
    /// one, the error message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Api(e) => match e.payload() {
                Some(payload) => payload.to_string(),
                None => e.to_string(),
            },
            other => other.to_string(),
        }
    }
}
