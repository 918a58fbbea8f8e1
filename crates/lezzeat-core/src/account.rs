//! Login and sign-up forms
//!
//! Only input is checked. There is no account server: after validation the
//! service waits a fixed delay standing in for the network call and then
//! succeeds.

use crate::error::ValidationError;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl LoginForm {
    /// Check required fields
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingFields`] if either field is blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

/// Sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    /// Full name
    pub name: String,
    /// Username
    pub username: String,
    /// College roll number
    pub roll_number: String,
    /// Email
    pub email: String,
    /// Password
    pub password: String,
    /// Password again
    pub confirm_password: String,
}

impl SignupForm {
    /// Check fields, then the confirmation, then the length
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found
    pub fn validate(&self, min_password_len: usize) -> Result<(), ValidationError> {
        let required = [
            &self.name,
            &self.username,
            &self.roll_number,
            &self.email,
            &self.password,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < min_password_len {
            return Err(ValidationError::PasswordTooShort {
                min: min_password_len,
            });
        }
        Ok(())
    }
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Username from the login form
    pub username: String,
}

/// Mock account backend
#[derive(Debug, Clone)]
pub struct AccountService {
    latency: Duration,
    min_password_len: usize,
}

impl AccountService {
    /// Create service
    #[must_use]
    pub fn new(latency: Duration, min_password_len: usize) -> Self {
        Self {
            latency,
            min_password_len,
        }
    }

    /// Minimum password length for sign-up
    #[inline]
    #[must_use]
    pub fn min_password_len(&self) -> usize {
        self.min_password_len
    }

    /// Validate and sign in; credentials are not checked
    ///
    /// # Errors
    /// Returns error if the form is incomplete
    pub async fn login(&self, form: &LoginForm) -> Result<Session, ValidationError> {
        if let Err(e) = form.validate() {
            tracing::warn!(error = %e, "login rejected");
            return Err(e);
        }
        tokio::time::sleep(self.latency).await;
        tracing::info!(username = %form.username, "signed in");
        Ok(Session {
            username: form.username.clone(),
        })
    }

    /// Validate and register; returns the success notice
    ///
    /// # Errors
    /// Returns the first validation failure
    pub async fn sign_up(&self, form: &SignupForm) -> Result<Notice, ValidationError> {
        if let Err(e) = form.validate(self.min_password_len) {
            tracing::warn!(error = %e, "sign-up rejected");
            return Err(e);
        }
        tokio::time::sleep(self.latency).await;
        tracing::info!(username = %form.username, "account created");
        Ok(Notice::new(
            "Success",
            "Account created successfully! You can now login.",
        ))
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), 6)
    }
}
