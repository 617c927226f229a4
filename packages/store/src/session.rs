//! # Session context
//!
//! [`Session`] is the explicit handle through which views and the HTTP client
//! reach the persisted authentication state. It owns a [`KeyValueStore`] and
//! restricts access to the fixed set of [`SessionKey`]s:
//!
//! | Key | Written by | Read by |
//! |-----|-----------|---------|
//! | `access_token` | password login, OAuth exchange | HTTP client, landing gate |
//! | `refresh_token` | password login, OAuth exchange | nothing yet |
//! | `auth_provider` | social login initiation | OAuth callback |
//!
//! Values are plain strings with no expiry. [`Session::clear`] drops both
//! tokens and leaves the provider hint in place.

use crate::kv::KeyValueStore;

/// Keys the front end persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    AuthProvider,
}

impl SessionKey {
    /// Storage key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AccessToken => "access_token",
            SessionKey::RefreshToken => "refresh_token",
            SessionKey::AuthProvider => "auth_provider",
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to the persisted session.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get(&self, key: SessionKey) -> Option<String> {
        self.store.get(key.as_str()).filter(|v| !v.is_empty())
    }

    pub fn set(&self, key: SessionKey, value: &str) {
        self.store.set(key.as_str(), value);
    }

    pub fn remove(&self, key: SessionKey) {
        self.store.remove(key.as_str());
    }

    /// Drop both tokens. The provider hint is kept.
    pub fn clear(&self) {
        self.remove(SessionKey::AccessToken);
        self.remove(SessionKey::RefreshToken);
    }

    pub fn access_token(&self) -> Option<String> {
        self.get(SessionKey::AccessToken)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.get(SessionKey::RefreshToken)
    }

    /// Persist a freshly issued token pair.
    pub fn set_tokens(&self, access: &str, refresh: &str) {
        self.set(SessionKey::AccessToken, access);
        self.set(SessionKey::RefreshToken, refresh);
    }

    /// Presence-only check; the token is never validated client-side.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Raw provider hint as stored, recognized or not.
    pub fn provider(&self) -> Option<String> {
        self.get(SessionKey::AuthProvider)
    }

    pub fn set_provider(&self, provider: &str) {
        self.set(SessionKey::AuthProvider, provider);
    }
}
