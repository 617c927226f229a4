//! # HTTP client wrapper
//!
//! [`ApiClient`] is the single pre-configured client every view talks to the
//! backend through. It resolves paths against the configured base URL, sends
//! JSON, and attaches `Authorization: Bearer <access_token>` whenever the
//! [`Session`] holds a token.
//!
//! Responses are classified by [`decode_response`]:
//!
//! | Status | Result |
//! |--------|--------|
//! | 2xx | body decoded as JSON into the caller's type |
//! | 401 | warning logged, [`ApiError::Unauthorized`] returned unchanged |
//! | other | [`ApiError::Server`] carrying the body as payload |
//!
//! The client never refreshes, retries, stores or deletes tokens.
//!
//! The flows depend on the [`Backend`] trait rather than on `ApiClient`
//! directly, which lets tests record calls without a network.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{KeyValueStore, Session};
use url::Url;

use crate::auth::AuthConfig;
use crate::error::ApiError;

/// Something that can POST JSON to the authentication backend.
pub trait Backend {
    fn post<B, R>(
        &self,
        path: &str,
        body: &B,
    ) -> impl std::future::Future<Output = Result<R, ApiError>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned;
}

/// Pre-configured JSON client for the DevBlogg backend.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    base_url: Url,
    http: reqwest::Client,
    session: Session<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: Url, session: Session<S>) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn from_config(config: &AuthConfig, session: Session<S>) -> Self {
        Self::new(config.api_base_url.clone(), session)
    }

    /// Append `path` to the base URL, keeping any path prefix the base has.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Start a request with the JSON content type and, if a token is stored,
    /// the bearer credential.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.access_token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let builder = self.request(Method::GET, path)?;
        self.send(builder).await
    }

    async fn send<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

impl<S: KeyValueStore> Backend for ApiClient<S> {
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!("POST {path}");
        let builder = self.request(Method::POST, path)?.json(body);
        self.send(builder).await
    }
}

/// Turn a status and raw body into the caller's type or an [`ApiError`].
pub fn decode_response<R: DeserializeOwned>(status: StatusCode, body: &str) -> Result<R, ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("Token expired or invalid.");
        return Err(ApiError::Unauthorized {
            payload: body_payload(body),
        });
    }
    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
            payload: body_payload(body),
        });
    }
    Ok(serde_json::from_str(body)?)
}

/// JSON body if it parses, otherwise the raw text as a JSON string.
fn body_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
