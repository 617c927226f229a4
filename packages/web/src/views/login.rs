//! Login page view with the password form and OAuth buttons.

use api::Provider;
use dioxus::prelude::*;
use ui::{LoginForm, SocialLoginButton};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 1rem; gap: 1rem;",

            h1 { "Test Auth System" }

            LoginForm {
                onsuccess: move |_| {
                    nav.push(Route::Home {});
                },
            }

            hr { style: "width: 20rem;" }

            div {
                class: "login-buttons",
                style: "display: flex; flex-direction: column; gap: 0.5rem; width: 20rem;",

                SocialLoginButton { provider: Provider::Google }
                SocialLoginButton { provider: Provider::GitHub }
            }
        }
    }
}
