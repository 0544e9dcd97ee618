use std::collections::BTreeMap;
use std::fmt;

use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;

const BLANK_FIELD: &str = "This field may not be blank.";

/// Field-keyed validation messages, serialized as `{"field": ["msg", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_email(raw: &str) -> Result<String, String> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(BLANK_FIELD.to_string());
    }

    if !EmailAddress::is_valid(email) {
        return Err("Enter a valid email address.".to_string());
    }

    Ok(email.to_string())
}

/// Looser shape check used where no full address validation is wanted.
pub fn is_plain_email(raw: &str) -> bool {
    static PLAIN_EMAIL: OnceLock<Regex> = OnceLock::new();
    PLAIN_EMAIL
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9_.-]+@[a-zA-Z-]+\.[.a-zA-Z-]+$").expect("static regex")
        })
        .is_match(raw)
}

pub fn validate_username(raw: &str) -> Result<String, String> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(BLANK_FIELD.to_string());
    }

    let length = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
        return Err(format!(
            "Username must be between {} and {} characters.",
            MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
        ));
    }

    if !username.chars().all(is_username_char) {
        return Err(
            "Username may only contain letters, numbers, '.', '_' and '-'.".to_string(),
        );
    }

    Ok(username.to_string())
}

pub fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '_' | '-')
}

pub fn validate_password(raw: &str, policy: &dyn PasswordPolicy) -> Result<String, String> {
    if raw.is_empty() {
        return Err(BLANK_FIELD.to_string());
    }

    policy.validate(raw).map_err(|e| e.to_string())?;

    Ok(raw.to_string())
}
