//! # API crate — backend access and authentication flows for DevBlogg
//!
//! Everything the views do that is not rendering lives here, free of any UI
//! framework so it can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], the JSON client that attaches the bearer token and logs 401s; the [`Backend`] seam |
//! | [`auth`] | Configuration, providers, password login, social-login URLs, the OAuth callback state machine, the landing gate |
//! | [`error`] | [`ApiError`] and [`AuthError`] |
//!
//! ## Backend endpoints consumed
//!
//! - `POST /api/auth/login/` with `{email, password}`
//! - `POST /api/auth/github/` and `POST /api/auth/google/` with `{code}`
//!
//! All three answer `{access, refresh}` on success.

pub mod auth;
pub mod client;
pub mod error;

#[cfg(test)]
mod testing;

pub use auth::{
    AuthConfig, CallbackParams, CallbackStatus, LandingGate, PasswordCredentials, Provider,
    TokenPair,
};
pub use client::{ApiClient, Backend};
pub use error::{ApiError, AuthError};

/// Front-end routes shared by the router and the redirect URI.
pub mod routes {
    pub const LANDING: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const CALLBACK: &str = "/auth/callback";
}
