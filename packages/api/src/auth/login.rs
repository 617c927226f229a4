//! Password login and social-login initiation.

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, Session};
use url::Url;

use super::{oauth, AuthConfig, Provider};
use crate::client::Backend;
use crate::error::AuthError;
use crate::routes;

/// Backend route for email/password login.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login/";

/// Body of a password login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

impl PasswordCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Tokens the backend issues on any successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    /// Write both tokens to the session.
    pub fn persist<S: KeyValueStore>(&self, session: &Session<S>) {
        session.set_tokens(&self.access, &self.refresh);
    }
}

/// Submit email and password; on success the tokens are stored.
pub async fn login_with_password<B, S>(
    backend: &B,
    session: &Session<S>,
    credentials: &PasswordCredentials,
) -> Result<TokenPair, AuthError>
where
    B: Backend,
    S: KeyValueStore,
{
    let tokens: TokenPair = backend.post(LOGIN_ENDPOINT, credentials).await?;
    tokens.persist(session);
    tracing::info!("Password login succeeded");
    Ok(tokens)
}

/// `<origin>/auth/callback`, the redirect URI registered with both providers.
pub fn callback_redirect_uri(app_origin: &Url) -> Result<Url, AuthError> {
    Ok(app_origin.join(routes::CALLBACK)?)
}

/// Prepare a social login: remember the provider and return the URL the
/// browser should navigate to.
///
/// A missing client id fails before anything is stored, so the caller can
/// alert and stay on the page.
pub fn begin_social_login<S: KeyValueStore>(
    config: &AuthConfig,
    session: &Session<S>,
    provider: Provider,
    app_origin: &Url,
) -> Result<Url, AuthError> {
    let client_id = config.client_id(provider)?;
    let redirect_uri = callback_redirect_uri(app_origin)?;
    let url = oauth::authorization_url(provider, client_id, &redirect_uri)?;

    session.set_provider(provider.as_str());
    tracing::info!("Redirecting to {} for authorization", provider.label());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::RecordingBackend;
    use serde_json::json;
    use store::MemoryStore;

    fn config_with(github: Option<&str>, google: Option<&str>) -> AuthConfig {
        AuthConfig {
            api_base_url: Url::parse("http://localhost:8000").unwrap(),
            github_client_id: github.map(str::to_string),
            google_client_id: google.map(str::to_string),
        }
    }

    fn origin() -> Url {
        Url::parse("http://localhost:3000").unwrap()
    }

    #[tokio::test]
    async fn test_password_login_stores_tokens() {
        let backend = RecordingBackend::ok(json!({"access": "A", "refresh": "B"}));
        let session = Session::new(MemoryStore::new());

        let tokens = login_with_password(
            &backend,
            &session,
            &PasswordCredentials::new("dev@blogg.test", "hunter22"),
        )
        .await
        .unwrap();

        assert_eq!(tokens.access, "A");
        assert_eq!(session.access_token().as_deref(), Some("A"));
        assert_eq!(session.refresh_token().as_deref(), Some("B"));
        assert_eq!(
            backend.calls(),
            vec![(
                LOGIN_ENDPOINT.to_string(),
                json!({"email": "dev@blogg.test", "password": "hunter22"})
            )]
        );
    }

    #[tokio::test]
    async fn test_password_login_failure_keeps_session_empty() {
        let payload = json!({"non_field_errors": ["Unable to log in with provided credentials."]});
        let backend = RecordingBackend::failing(400, payload.clone());
        let session = Session::new(MemoryStore::new());

        let err = login_with_password(&backend, &session, &PasswordCredentials::new("a@b.c", "x"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Api(ApiError::Server { status: 400, .. })));
        assert_eq!(err.user_message(), payload.to_string());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_social_login_each_provider() {
        let config = config_with(Some("gh-id"), Some("g-id"));
        for provider in Provider::ALL {
            let session = Session::new(MemoryStore::new());
            let url = begin_social_login(&config, &session, provider, &origin()).unwrap();

            let host = Url::parse(provider.authorize_endpoint()).unwrap();
            assert_eq!(url.host_str(), host.host_str());

            let query: std::collections::HashMap<String, String> =
                url.query_pairs().into_owned().collect();
            assert_eq!(query["state"], provider.as_str());
            assert_eq!(query["scope"], provider.scopes().join(" "));
            assert_eq!(query["redirect_uri"], "http://localhost:3000/auth/callback");
            assert_eq!(session.provider().as_deref(), Some(provider.as_str()));
        }
    }

    #[test]
    fn test_social_login_missing_client_id() {
        let config = config_with(None, Some("g-id"));
        let session = Session::new(MemoryStore::new());

        let err = begin_social_login(&config, &session, Provider::GitHub, &origin()).unwrap_err();
        assert_eq!(err.user_message(), "Missing DEVBLOGG_GITHUB_CLIENT_ID");
        assert!(session.provider().is_none());

        let config = config_with(Some("gh-id"), None);
        let err = begin_social_login(&config, &session, Provider::Google, &origin()).unwrap_err();
        assert!(matches!(
            err,
            AuthError::MissingClientConfiguration { provider: Provider::Google, .. }
        ));
    }

    #[test]
    fn test_redirect_uri_ignores_current_path() {
        let here = Url::parse("https://devblogg.test/login?next=1").unwrap();
        assert_eq!(
            callback_redirect_uri(&here).unwrap().as_str(),
            "https://devblogg.test/auth/callback"
        );
    }
}
