//! Authorization request URLs, built with the `oauth2` crate's typed client.

use oauth2::basic::BasicClient;
use oauth2::{AuthUrl, ClientId, CsrfToken, RedirectUrl, Scope};
use url::Url;

use super::Provider;
use crate::error::AuthError;

/// Build the URL the browser is sent to for `provider`.
///
/// `state` is the provider name rather than a random nonce: it only tells the
/// callback which backend endpoint to use and is never validated. This falls
/// short of the CSRF protection OAuth intends `state` for.
pub fn authorization_url(
    provider: Provider,
    client_id: &str,
    redirect_uri: &Url,
) -> Result<Url, AuthError> {
    let client = BasicClient::new(ClientId::new(client_id.to_string()))
        .set_auth_uri(AuthUrl::new(provider.authorize_endpoint().to_string())?)
        .set_redirect_uri(RedirectUrl::from_url(redirect_uri.clone()));

    let mut request = client.authorize_url(|| CsrfToken::new(provider.as_str().to_string()));
    for scope in provider.scopes() {
        request = request.add_scope(Scope::new(scope.to_string()));
    }
    for (name, value) in provider.extra_params() {
        request = request.add_extra_param(*name, *value);
    }

    let (url, _state) = request.url();
    Ok(url)
}
