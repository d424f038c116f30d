//! Form Validation
//!
//! Client-side checks run before any request leaves the browser.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{LoginRequest, RegisterRequest};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required!")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    /// Username or email
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.identifier.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }

    /// The only way to get a request body: an invalid form yields none
    pub fn to_request(&self) -> Result<LoginRequest<'_>, FormError> {
        self.validate()?;
        Ok(LoginRequest {
            identifier: self.identifier.trim(),
            password: &self.password,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn to_request(&self) -> Result<RegisterRequest<'_>, FormError> {
        self.validate()?;
        Ok(RegisterRequest {
            username: self.username.trim(),
            email: self.email.trim(),
            password: &self.password,
        })
    }
}

/// Contact form; there is no endpoint behind it yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() || self.email.is_empty() || self.message.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(identifier: &str, password: &str) -> LoginForm {
        LoginForm { identifier: identifier.into(), password: password.into() }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(login("asha", "").validate(), Err(FormError::MissingFields));
        assert_eq!(login("", "secret").validate(), Err(FormError::MissingFields));
        assert_eq!(login("   ", "secret").validate(), Err(FormError::MissingFields));
        assert_eq!(login("asha", "secret").validate(), Ok(()));
    }

    #[test]
    fn test_empty_password_yields_no_login_request() {
        assert_eq!(login("asha", "").to_request().err(), Some(FormError::MissingFields));

        let form = login("  asha@example.com ", "secret");
        let request = form.to_request().unwrap();
        assert_eq!(request.identifier, "asha@example.com");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_invalid_registration_yields_no_request() {
        let form = RegisterForm {
            username: " Asha ".into(),
            email: "not-an-email".into(),
            password: "pw".into(),
        };
        assert_eq!(form.to_request().err(), Some(FormError::InvalidEmail));

        let form = RegisterForm { email: "asha@example.com".into(), ..form };
        let request = form.to_request().unwrap();
        assert_eq!(request.username, "Asha");
    }

    #[test]
    fn test_register_checks_email_shape() {
        let mut form = RegisterForm {
            username: "Asha".into(),
            email: "asha@example".into(),
            password: "pw".into(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.email = "asha@example.com".into();
        assert_eq!(form.validate(), Ok(()));

        form.password.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_contact_form() {
        let mut form = ContactForm {
            name: "Ravi".into(),
            email: "ravi@example.in".into(),
            message: "   ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingFields));
        form.message = "Best time to visit Ooty?".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.tn.gov.in"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("spaced @mail.com"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(FormError::MissingFields.to_string(), "All fields are required!");
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address.");
    }
}
