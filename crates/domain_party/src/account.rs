//! Sign-in and registration rules
//!
//! There is no credential store behind these forms. Any non-blank email and
//! password pair signs in, and the role is derived from the email address.

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::ValidateEmail;

use core_kernel::validation::missing_fields;

use crate::error::PartyError;
use crate::user::UserRole;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Role handed to anyone whose email does not mark them as an administrator
pub const DEFAULT_SESSION_ROLE: &str = "user";

/// Who is signed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub role: String,
}

impl SessionUser {
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
        }
    }

    /// Admin pages are open to the admin role and to any admin mailbox
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin.as_str() || self.email.contains("admin")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn authenticate(&self) -> Result<SessionUser, PartyError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(PartyError::MissingCredentials);
        }

        let role = if email.contains("admin") {
            UserRole::Admin.as_str()
        } else {
            DEFAULT_SESSION_ROLE
        };
        info!(email, role, "User signed in");
        Ok(SessionUser::new(email, role))
    }
}

/// Data entered on the registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub organization: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Checks the form, reporting the first problem found
    pub fn validate(&self) -> Result<UserRole, PartyError> {
        if self.password != self.confirm_password {
            return Err(PartyError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PartyError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }

        let mut missing = missing_fields(&[
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("email", self.email.as_str()),
        ]);
        if self.role.is_none() {
            missing.push("role".to_string());
        }
        if self.organization.trim().is_empty() {
            missing.push("organization".to_string());
        }

        match self.role {
            Some(role) if missing.is_empty() => {
                if !self.email.trim().validate_email() {
                    return Err(PartyError::InvalidEmail(self.email.clone()));
                }
                Ok(role)
            }
            _ => Err(PartyError::MissingRequiredFields(missing)),
        }
    }

    /// Validates the form and signs the new account in
    pub fn register(&self) -> Result<SessionUser, PartyError> {
        let role = self.validate()?;
        let email = self.email.trim();
        info!(email, role = role.as_str(), organization = %self.organization, "Account registered");
        Ok(SessionUser::new(email, role.as_str()))
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> Result<SessionUser, PartyError> {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
        .authenticate()
    }

    fn registration() -> Registration {
        Registration {
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam.lee@clinic.com".to_string(),
            role: Some(UserRole::Veterinarian),
            organization: "Lee Animal Hospital".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_login_role_from_email() {
        assert_eq!(login("admin@vetinsure.com", "x").unwrap().role, "admin");
        assert_eq!(login("john.smith@email.com", "x").unwrap().role, "user");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let err = login("", "x").unwrap_err();
        assert_eq!(err.to_string(), "Please enter both email and password");
        assert!(login("a@b.com", "").is_err());
    }

    #[test]
    fn test_admin_by_role_or_email() {
        assert!(SessionUser::new("someone@vetinsure.com", "admin").is_admin());
        assert!(SessionUser::new("sysadmin@clinic.com", "veterinarian").is_admin());
        assert!(!SessionUser::new("john.smith@email.com", "user").is_admin());
    }

    #[test]
    fn test_password_mismatch_checked_first() {
        let mut r = registration();
        r.confirm_password = "other".to_string();
        r.first_name = String::new();
        assert_eq!(r.validate().unwrap_err().to_string(), "Passwords do not match");
    }

    #[test]
    fn test_password_length() {
        let mut r = registration();
        r.password = "12345".to_string();
        r.confirm_password = "12345".to_string();
        assert_eq!(r.validate().unwrap_err().to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_missing_role_and_organization() {
        let mut r = registration();
        r.role = None;
        r.organization = " ".to_string();
        match r.validate() {
            Err(PartyError::MissingRequiredFields(fields)) => {
                assert_eq!(fields, vec!["role".to_string(), "organization".to_string()]);
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_register_signs_in_with_chosen_role() {
        let session = registration().register().unwrap();
        assert_eq!(session.role, "veterinarian");
        assert!(!session.is_admin());
        assert_eq!(registration().full_name(), "Sam Lee");
    }
}
