//! Protected landing page.

use api::auth::landing_gate;
use api::LandingGate;
use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if landing_gate(&auth.session) == LandingGate::RedirectToLogin {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        main {
            style: "padding: 1.5rem;",

            h1 { "Logged in" }

            p { "OAuth login worked. You can now call protected APIs." }

            LogoutButton {
                onlogout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
