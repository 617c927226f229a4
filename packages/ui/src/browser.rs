//! Thin wrappers over the browser APIs the views need. Outside wasm they log
//! instead, so components still build for native targets.

use std::time::Duration;

use url::Url;

/// Origin used when there is no `window` to ask.
#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Leave the app for an absolute URL (the OAuth provider).
pub fn navigate_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Navigate to {url}");
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::error!("Failed to show alert: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("alert: {message}");
    }
}

/// `window.location.origin` of the running page.
pub fn current_origin() -> Option<Url> {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()?.location().origin().ok()?;
        Url::parse(&origin).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Url::parse(FALLBACK_ORIGIN).ok()
    }
}

/// Raw `window.location.search`, still percent-encoded.
pub fn current_search() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().search().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
