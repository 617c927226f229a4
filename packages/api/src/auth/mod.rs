//! Authentication flows: password login, OAuth (GitHub, Google) initiation and
//! callback handling, and the landing-page gate.

mod callback;
mod config;
mod guard;
mod login;
mod oauth;
mod provider;

pub use callback::{handle_callback, CallbackParams, CallbackStatus, CodeExchange, LANDING_DELAY};
pub use config::{
    AuthConfig, API_URL_VAR, DEFAULT_API_URL, GITHUB_CLIENT_ID_VAR, GOOGLE_CLIENT_ID_VAR,
};
pub use guard::{landing_gate, logout, LandingGate};
pub use login::{
    begin_social_login, callback_redirect_uri, login_with_password, PasswordCredentials,
    TokenPair, LOGIN_ENDPOINT,
};
pub use oauth::authorization_url;
pub use provider::{resolve_provider, Provider, ProviderSource, UnknownProvider, DEFAULT_PROVIDER};
