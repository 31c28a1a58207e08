//! Contact form validation. Submissions are acknowledged and dropped; there is
//! no delivery and no storage.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const ACKNOWLEDGMENT: &str = "Thanks for your message — I'll get back to you soon!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("invalid contact submission: {}", field_list(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    #[cfg(test)]
    pub fn fields(&self) -> Vec<ContactField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn message_for(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub message: &'static str,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

/// Validates every field and reports all failures at once.
pub fn submit_contact(input: &ContactSubmission) -> Result<Acknowledgment, ValidationError> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push(FieldError {
            field: ContactField::Name,
            message: "Please enter your name.".to_string(),
        });
    }

    if input.email.trim().is_empty() {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "Please enter your email address.".to_string(),
        });
    } else if !is_valid_email(&input.email) {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "Please enter a valid email address, like name@example.com.".to_string(),
        });
    }

    if input.message.trim().is_empty() {
        errors.push(FieldError {
            field: ContactField::Message,
            message: "Please write a message.".to_string(),
        });
    }

    if !errors.is_empty() {
        info!("Contact submission rejected: {}", field_list(&errors));
        return Err(ValidationError { errors });
    }

    info!(
        name_len = input.name.trim().len(),
        message_len = input.message.trim().len(),
        "Contact submission acknowledged"
    );
    Ok(Acknowledgment {
        message: ACKNOWLEDGMENT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_name_fails_naming_name() {
        let err = submit_contact(&submission("", "a@b.com", "hi")).unwrap_err();
        assert_eq!(err.fields(), vec![ContactField::Name]);
    }

    #[test]
    fn test_bad_email_fails_naming_email() {
        let err = submit_contact(&submission("A", "not-an-email", "hi")).unwrap_err();
        assert_eq!(err.fields(), vec![ContactField::Email]);
        assert!(err.message_for(ContactField::Email).unwrap().contains("valid"));
    }

    #[test]
    fn test_valid_submission_is_acknowledged() {
        let ack = submit_contact(&submission("A", "a@b.com", "hi")).unwrap();
        assert_eq!(ack.message, ACKNOWLEDGMENT);
    }

    #[test]
    fn test_all_fields_reported_together() {
        let err = submit_contact(&ContactSubmission::default()).unwrap_err();
        assert_eq!(
            err.fields(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(
            err.to_string(),
            "invalid contact submission: name, email, message"
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let err = submit_contact(&submission("   ", "a@b.com", "\n\t")).unwrap_err();
        assert_eq!(err.fields(), vec![ContactField::Name, ContactField::Message]);
    }

    #[test]
    fn test_email_pattern_edge_cases() {
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("  a@b.co  "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn test_missing_email_has_distinct_message() {
        let err = submit_contact(&submission("A", "", "hi")).unwrap_err();
        assert_eq!(
            err.message_for(ContactField::Email),
            Some("Please enter your email address.")
        );
    }
}
