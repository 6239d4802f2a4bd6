use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::AuthRequest;

/// Session returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// AuthService is the boundary to whatever performs account operations.
///
/// Screens call it when a credential form is submitted and react to the
/// result; they never inspect credentials themselves. Implementations must
/// be shareable across the event loop (`Send + Sync`).
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Ask for a password reset link to be sent to `email`
    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Outcome of dispatching an [`AuthRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    LoggedIn(Session),
    SignedUp,
    ResetRequested,
}

/// Route a submitted form request to the matching service call
pub async fn dispatch<A: AuthService + ?Sized>(
    auth: &A,
    request: &AuthRequest,
) -> Result<AuthOutcome, AuthError> {
    match request {
        AuthRequest::Login { email, password } => auth.login(email, password).await.map(AuthOutcome::LoggedIn),
        AuthRequest::SignUp { email, password } => {
            auth.sign_up(email, password).await.map(|_| AuthOutcome::SignedUp)
        }
        AuthRequest::PasswordReset { email } => auth
            .request_password_reset(email)
            .await
            .map(|_| AuthOutcome::ResetRequested),
    }
}
