//! This crate contains all shared UI for the workspace.

pub mod browser;
pub use browser::sleep;

mod auth;
pub use auth::{use_auth, AuthContext, LoginForm, LogoutButton, SessionProvider, SocialLoginButton};
