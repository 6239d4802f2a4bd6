use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::services::auth::{AuthError, AuthService, Session};

/// A call received by [`MockAuthService`], keyed by email
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    Login(String),
    SignUp(String),
    PasswordReset(String),
}

/// Mock implementation of AuthService for testing
///
/// Records every call in memory. When built with [`MockAuthService::failing`]
/// every call returns the configured error.
#[derive(Debug, Clone, Default)]
pub struct MockAuthService {
    calls: Arc<Mutex<Vec<AuthCall>>>,
    failure: Arc<Mutex<Option<AuthError>>>,
}

impl MockAuthService {
    /// Create a mock that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with `error`
    pub fn failing(error: AuthError) -> Self {
        let service = Self::new();
        *service.failure.lock().unwrap() = Some(error);
        service
    }

    /// Change failure behaviour after construction
    pub fn set_failure(&self, error: Option<AuthError>) {
        *self.failure.lock().unwrap() = error;
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sign_up_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, AuthCall::SignUp(_)))
            .count()
    }

    fn record(&self, call: AuthCall) -> Result<(), AuthError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        self.record(AuthCall::Login(email.to_string()))?;
        Ok(Session {
            email: email.to_string(),
            issued_at: Utc::now(),
        })
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        self.record(AuthCall::SignUp(email.to_string()))
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.record(AuthCall::PasswordReset(email.to_string()))
    }
}
