//! Browser-local session persistence for DevBlogg.
//!
//! The [`KeyValueStore`] trait abstracts the flat string store the front end
//! keeps its tokens in. [`MemoryStore`] backs native builds and tests,
//! [`LocalStorageStore`] backs the browser through `window.localStorage`.
//! [`Session`] is the typed context object the views receive instead of
//! touching storage directly.

pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use kv::KeyValueStore;
pub use session::{Session, SessionKey};

/// The store used by the running application on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type BrowserStore = LocalStorageStore;

/// The store used by the running application on this platform.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type BrowserStore = MemoryStore;

/// Build the platform store: `localStorage` on the web, memory elsewhere.
pub fn browser_store() -> BrowserStore {
    BrowserStore::default()
}
