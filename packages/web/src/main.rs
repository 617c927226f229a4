use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AuthCallback, Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/auth/callback?:..query")]
    AuthCallback { query: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| api::AuthConfig::from_build_env().map_err(|e| e.to_string()));

    match config {
        Ok(config) => rsx! {
            SessionProvider { config,
                Router::<Route> {}
            }
        },
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            rsx! {
                p { "Configuration error: {e}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_route_takes_whole_query() {
        let route: Route = "/auth/callback?code=abc123&state=google".parse().unwrap();
        assert_eq!(
            route,
            Route::AuthCallback {
                query: "code=abc123&state=google".to_string()
            }
        );
    }
}
