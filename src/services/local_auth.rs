use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::services::auth::{AuthError, AuthService, Session};

/// Placeholder collaborator used by the binary
///
/// There is no account backend. Every request is logged and accepted as long
/// as an email was entered; passwords are never inspected or logged.
#[derive(Debug, Clone, Default)]
pub struct LocalAuthService;

impl LocalAuthService {
    pub fn new() -> Self {
        Self
    }

    fn require_email(email: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() {
            Err(AuthError::MissingEmail)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AuthService for LocalAuthService {
    async fn login(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        Self::require_email(email)?;
        info!("Accepting login for {} without verification", email);
        Ok(Session {
            email: email.to_string(),
            issued_at: Utc::now(),
        })
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        Self::require_email(email)?;
        info!("Sign-up requested for {}", email);
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        Self::require_email(email)?;
        info!("Password reset requested for {}", email);
        Ok(())
    }
}
