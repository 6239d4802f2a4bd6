//! Per-screen credential forms and the requests they submit
//!
//! Forms hold raw field values only. Setters overwrite without validation;
//! the sole local check is the sign-up password confirmation.

use thiserror::Error;

/// Request handed to the auth collaborator when a form is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    SignUp { email: String, password: String },
    PasswordReset { email: String },
}

impl AuthRequest {
    pub fn email(&self) -> &str {
        match self {
            Self::Login { email, .. } | Self::SignUp { email, .. } | Self::PasswordReset { email } => email,
        }
    }
}

/// Local validation failures raised before anything leaves the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Always produces a login request; credentials are not checked here
    pub fn submit(&self) -> AuthRequest {
        AuthRequest::Login {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    /// Compare the two password fields byte for byte
    pub fn submit(&self) -> Result<AuthRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(AuthRequest::SignUp {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub email: String,
}

impl ResetForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn submit(&self) -> AuthRequest {
        AuthRequest::PasswordReset {
            email: self.email.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
