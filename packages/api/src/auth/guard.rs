//! Access check for the protected landing page.

use store::{KeyValueStore, Session};

/// Outcome of visiting the landing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingGate {
    Render,
    RedirectToLogin,
}

/// Presence-only check: any stored access token lets the page render. The
/// token is not verified with the backend.
pub fn landing_gate<S: KeyValueStore>(session: &Session<S>) -> LandingGate {
    if session.is_authenticated() {
        LandingGate::Render
    } else {
        LandingGate::RedirectToLogin
    }
}

/// Forget both tokens. The caller sends the user back to the login page.
pub fn logout<S: KeyValueStore>(session: &Session<S>) {
    session.clear();
    tracing::info!("Logged out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_no_token_redirects() {
        let session = Session::new(MemoryStore::new());
        session.set_tokens("", "B");
        assert_eq!(landing_gate(&session), LandingGate::RedirectToLogin);
    }

    #[test]
    fn test_logout_closes_gate() {
        let session = Session::new(MemoryStore::new());
        session.set_tokens("A", "B");
        assert_eq!(landing_gate(&session), LandingGate::Render);

        logout(&session);
        assert_eq!(landing_gate(&session), LandingGate::RedirectToLogin);
        assert!(session.refresh_token().is_none());
    }
}
