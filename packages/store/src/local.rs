//! # `localStorage` store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Values live in `window.localStorage`, so they survive
//! reloads and the full-page navigation to and from the OAuth provider.
//!
//! ## Error handling
//!
//! The store looks up `localStorage` on every call. When it is unavailable
//! (storage disabled, private mode quota errors) reads return `None` and
//! writes are dropped with a logged warning. Nothing is encrypted and nothing
//! expires.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}
