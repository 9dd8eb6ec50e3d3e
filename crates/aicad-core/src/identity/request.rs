//! Login and registration request types.
//!
//! These model the credential forms of the demo. No real credential
//! verification exists in this system: any well-formed submission becomes
//! the current identity. The password fields are validated for shape
//! (registration requires a matching confirmation) and then discarded,
//! never stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::Identity;
use crate::error::AicadError;

/// Validation failures for registration submissions.
///
/// The password/confirmation mismatch is the only validation failure with
/// an explicit user-visible message in this design; registration does not
/// proceed and the user must resubmit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

impl From<RegistrationError> for AicadError {
    fn from(e: RegistrationError) -> Self {
        AicadError::Validation(e.to_string())
    }
}

/// A login form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Builds the identity this login resolves to.
    ///
    /// The display name is derived from the local part of the email
    /// address, matching the mock-authentication behaviour of the demo.
    pub fn into_identity(self) -> Identity {
        let name = self
            .email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or("user")
            .to_string();
        Identity::new(name, self.email)
    }
}

/// A registration form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// Checks the submission without creating an identity.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Validates the submission and builds the identity it resolves to.
    ///
    /// On mismatch no identity is created; the caller surfaces the message
    /// and stays on the registration screen.
    pub fn into_identity(self) -> Result<Identity, RegistrationError> {
        self.validate()?;
        Ok(Identity::new(self.name, self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_name_from_email_local_part() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let identity = request.into_identity();
        assert_eq!(identity.name, "a");
        assert_eq!(identity.email, "a@b.com");
    }

    #[test]
    fn test_login_with_odd_email_still_yields_a_name() {
        let request = LoginRequest {
            email: "@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(request.into_identity().name, "user");
    }

    #[test]
    fn test_registration_password_mismatch_creates_no_identity() {
        let request = RegistrationRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "xyz".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(RegistrationError::PasswordMismatch)
        );
        assert!(request.into_identity().is_err());
    }

    #[test]
    fn test_registration_with_matching_passwords() {
        let request = RegistrationRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
        };
        let identity = request.into_identity().unwrap();
        assert_eq!(identity.name, "Ada");
        assert!(identity.company.is_none());
    }

    #[test]
    fn test_mismatch_message_is_user_visible() {
        assert_eq!(
            RegistrationError::PasswordMismatch.to_string(),
            "Passwords do not match!"
        );
    }
}
