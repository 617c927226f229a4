mod login;
pub use login::Login;

mod callback;
pub use callback::AuthCallback;

mod home;
pub use home::Home;
