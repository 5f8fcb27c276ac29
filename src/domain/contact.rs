use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{char_len, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if char_len(&self.name) < 2 {
            errors.add("name", "Name is required");
        }
        if !is_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if char_len(&self.subject) < 2 {
            errors.add("subject", "Subject is required");
        }
        if char_len(&self.message) < 10 {
            errors.add("message", "Message must be at least 10 characters");
        }
        errors.into_result(())
    }
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
