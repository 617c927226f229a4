//! OAuth callback page: trades the code for tokens, then goes home.

use api::auth::{handle_callback, LANDING_DELAY};
use api::{CallbackParams, CallbackStatus};
use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn AuthCallback(query: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut status = use_signal(|| CallbackStatus::Initializing);

    // The code is single-use, so the exchange runs once per mount.
    use_hook(move || {
        let raw = ui::browser::current_search();
        let params = CallbackParams::from_location(raw.as_deref(), &query);
        spawn(async move {
            let outcome = handle_callback(&auth.client, &auth.session, &params, |s| {
                status.set(s.clone())
            })
            .await;

            if outcome == CallbackStatus::Success {
                ui::sleep(LANDING_DELAY).await;
                nav.push(Route::Home {});
            }
        });
    });

    let message = status().message();

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; min-height: 100vh;",
            h2 { "{message}" }
        }
    }
}
