//! Authentication context and components for the UI.

use api::auth::{begin_social_login, login_with_password, logout};
use api::{ApiClient, AuthConfig, PasswordCredentials, Provider, TokenPair};
use dioxus::prelude::*;
use store::{BrowserStore, Session};

use crate::browser::{alert, current_origin, navigate_external};

/// Session, backend client and configuration shared by every view.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub session: Session<BrowserStore>,
    pub client: ApiClient<BrowserStore>,
    pub config: AuthConfig,
}

impl AuthContext {
    pub fn new(config: AuthConfig) -> Self {
        let session = Session::new(store::browser_store());
        let client = ApiClient::from_config(&config, session.clone());
        Self {
            session,
            client,
            config,
        }
    }
}

/// Get the authentication context provided by [`SessionProvider`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Wrap the router with this component so views can reach the session.
#[component]
pub fn SessionProvider(config: AuthConfig, children: Element) -> Element {
    use_context_provider(|| AuthContext::new(config.clone()));

    rsx! {
        {children}
    }
}

/// Email/password form posting to the login endpoint.
#[component]
pub fn LoginForm(onsuccess: Option<EventHandler<TokenPair>>) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            loading.set(true);
            let credentials = PasswordCredentials::new(email(), password());
            let result = login_with_password(&auth.client, &auth.session, &credentials).await;
            loading.set(false);

            match result {
                Ok(tokens) => {
                    alert("Login success!");
                    if let Some(handler) = onsuccess {
                        handler.call(tokens);
                    }
                }
                Err(e) => {
                    tracing::error!("Password login failed: {e}");
                    alert(&format!("Login failed: {}", e.user_message()));
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_login,
            style: "display: flex; flex-direction: column; gap: 0.5rem; width: 20rem;",

            input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                r#type: "submit",
                disabled: loading(),
                if loading() { "Logging in..." } else { "Login Normal" }
            }
        }
    }
}

/// Button to start the OAuth flow with a specific provider.
#[component]
pub fn SocialLoginButton(
    provider: Provider,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        let Some(origin) = current_origin() else {
            tracing::error!("Cannot determine page origin for the OAuth redirect");
            return;
        };
        match begin_social_login(&auth.config, &auth.session, provider, &origin) {
            Ok(url) => navigate_external(url.as_str()),
            Err(e) => {
                tracing::error!("Cannot start {} login: {e}", provider.label());
                alert(&e.user_message());
            }
        }
    };

    let label = provider.label();

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "Login with {label}"
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    onlogout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        logout(&auth.session);
        onlogout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
