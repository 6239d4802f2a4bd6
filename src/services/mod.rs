pub mod auth;
pub mod local_auth;
#[cfg(test)]
pub mod mock_auth;

pub use auth::{dispatch, AuthError, AuthOutcome, AuthService, Session};
pub use local_auth::LocalAuthService;
