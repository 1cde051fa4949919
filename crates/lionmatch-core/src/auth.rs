//! Authentication seam.
//!
//! The auth protocol itself is the backend's business; the client only needs
//! typed requests, client-side validation, and a gateway trait the
//! infrastructure layer implements.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The authenticated identity returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Opaque, stable user id (UUID format); also the profile key
    pub id: String,
    pub email: String,
}

/// Sign-in credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form.
///
/// Validation short-circuits before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(MatchError::validation("email is required"));
        }
        if self.password != self.password_confirm {
            return Err(MatchError::validation("passwords do not match"));
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(MatchError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }
}

/// An abstract gateway to the backend's auth service.
///
/// Implementations own session state (access token); the rest of the client
/// only sees [`AuthUser`] identities.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    /// Creates an account and signs it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Signs in with email and password. Rejected credentials surface as
    /// [`MatchError::Auth`].
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Asks the backend to email a password-reset link.
    async fn request_password_reset(&self, email: &str) -> Result<()>;

    /// The user behind the current session, if one is active.
    async fn current_user(&self) -> Result<Option<AuthUser>>;

    /// Deletes the auth account (final step of account teardown).
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            password_confirm: "secret1".to_string(),
        }
    }

    #[test]
    fn test_validate_success() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_mismatched_passwords() {
        let mut req = request();
        req.password_confirm = "other".to_string();
        assert!(req.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_validate_short_password() {
        let mut req = request();
        req.password = "abc".to_string();
        req.password_confirm = "abc".to_string();
        assert!(req.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_validate_empty_email() {
        let mut req = request();
        req.email = " ".to_string();
        assert!(req.validate().unwrap_err().is_validation());
    }
}
