//! Validation rules for the two write paths.
//!
//! The record shapes in `db::models` carry no rules of their own. Request
//! bodies arrive as raw JSON and are checked here field by field; only a body
//! that passes every rule becomes an insertable record. The browser-side form
//! rules (signup with password confirmation and terms, newsletter) live here
//! too so both sides agree on what a valid name, email and password are.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::db::models::{NewNewsletter, NewUser};

pub const NAME_MIN_CHARS: usize = 2;
pub const PASSWORD_MIN_CHARS: usize = 8;

const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
const PASSWORDS_DIFFER: &str = "Passwords do not match";
const TERMS_REQUIRED: &str = "You must accept the terms and conditions";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Every rule a payload broke, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.push(FieldIssue { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.field == field)
            .map(|i| i.message.as_str())
    }

    fn into_result<T>(self, ok: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{} at \"{}\"", i.message, i.field))
            .collect();
        write!(f, "Validation error: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn check_name(errors: &mut ValidationErrors, name: &str) {
    if name.chars().count() < NAME_MIN_CHARS {
        errors.push("name", NAME_TOO_SHORT);
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !is_valid_email(email) {
        errors.push("email", EMAIL_INVALID);
    }
}

fn check_password(errors: &mut ValidationErrors, password: &str) {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push("password", PASSWORD_TOO_SHORT);
    }
}

/// Pulls a required string field out of a JSON object, recording why not.
fn string_field(errors: &mut ValidationErrors, body: &Value, field: &'static str) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "Required");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(field, format!("Expected string, received {}", json_type(other)));
            None
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn require_object(body: &Value) -> Result<(), ValidationErrors> {
    if body.is_object() {
        return Ok(());
    }
    let mut errors = ValidationErrors::default();
    errors.push("body", format!("Expected object, received {}", json_type(body)));
    Err(errors)
}

/// Checks a registration body and builds the user to insert.
pub fn new_user(body: &Value) -> Result<NewUser, ValidationErrors> {
    require_object(body)?;
    let mut errors = ValidationErrors::default();

    let name = string_field(&mut errors, body, "name").map(|s| s.trim().to_string());
    if let Some(name) = &name {
        check_name(&mut errors, name);
    }
    let email = string_field(&mut errors, body, "email").map(|s| s.trim().to_string());
    if let Some(email) = &email {
        check_email(&mut errors, email);
    }
    let password = string_field(&mut errors, body, "password");
    if let Some(password) = &password {
        check_password(&mut errors, password);
    }

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) => {
            errors.into_result(|| NewUser { name, email, password })
        }
        _ => Err(errors),
    }
}

/// Checks a newsletter body and builds the subscription to insert.
pub fn new_newsletter(body: &Value) -> Result<NewNewsletter, ValidationErrors> {
    require_object(body)?;
    let mut errors = ValidationErrors::default();

    let name = string_field(&mut errors, body, "name").map(|s| s.trim().to_string());
    if let Some(name) = &name {
        check_name(&mut errors, name);
    }
    let email = string_field(&mut errors, body, "email").map(|s| s.trim().to_string());
    if let Some(email) = &email {
        check_email(&mut errors, email);
    }

    match (name, email) {
        (Some(name), Some(email)) => errors.into_result(|| NewNewsletter { name, email }),
        _ => Err(errors),
    }
}

/// The signup form as the browser collects it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewUser, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = self.name.trim();
        let email = self.email.trim();
        check_name(&mut errors, name);
        check_email(&mut errors, email);
        check_password(&mut errors, &self.password);
        if self.password != self.confirm_password {
            errors.push("confirmPassword", PASSWORDS_DIFFER);
        }
        if !self.terms {
            errors.push("terms", TERMS_REQUIRED);
        }
        errors.into_result(|| NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterForm {
    pub name: String,
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<NewNewsletter, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = self.name.trim();
        let email = self.email.trim();
        check_name(&mut errors, name);
        check_email(&mut errors, email);
        errors.into_result(|| NewNewsletter {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_rules() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.in"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(".a@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email("a@example.c"));
    }

    #[test]
    fn valid_registration_is_trimmed() {
        let user = new_user(&json!({
            "name": "  Asha ",
            "email": " asha@example.com",
            "password": "hunter22!"
        })).unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.password, "hunter22!");
    }

    #[test]
    fn registration_reports_every_field() {
        let err = new_user(&json!({ "name": "A", "password": 12345678 })).unwrap_err();
        assert_eq!(err.for_field("name"), Some(NAME_TOO_SHORT));
        assert_eq!(err.for_field("email"), Some("Required"));
        assert_eq!(err.for_field("password"), Some("Expected string, received number"));
        assert_eq!(
            err.to_string(),
            "Validation error: Name must be at least 2 characters at \"name\"; \
             Required at \"email\"; Expected string, received number at \"password\""
        );
    }

    #[test]
    fn short_password_rejected() {
        let err = new_user(&json!({ "name": "Asha", "email": "asha@example.com", "password": "short" })).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.for_field("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn newsletter_rejects_bad_email() {
        let err = new_newsletter(&json!({ "name": "A", "email": "bad-email" })).unwrap_err();
        assert_eq!(err.for_field("email"), Some(EMAIL_INVALID));
        assert_eq!(err.for_field("name"), Some(NAME_TOO_SHORT));
    }

    #[test]
    fn non_object_body_rejected() {
        let err = new_newsletter(&json!(["a", "b"])).unwrap_err();
        assert_eq!(err.for_field("body"), Some("Expected object, received array"));
    }

    #[test]
    fn signup_form_checks_confirmation_and_terms() {
        let form = SignupForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter22!".to_string(),
            confirm_password: "hunter23!".to_string(),
            terms: false,
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.for_field("confirmPassword"), Some(PASSWORDS_DIFFER));
        assert_eq!(err.for_field("terms"), Some(TERMS_REQUIRED));

        let ok = SignupForm { confirm_password: "hunter22!".to_string(), terms: true, ..form };
        assert_eq!(ok.validate().unwrap().email, "asha@example.com");
    }

    #[test]
    fn newsletter_form() {
        let form = NewsletterForm { name: "Ravi".to_string(), email: "ravi@example.com".to_string() };
        assert_eq!(form.validate().unwrap().name, "Ravi");
        let bad = NewsletterForm { name: "R".to_string(), email: "ravi".to_string() };
        assert_eq!(bad.validate().unwrap_err().issues.len(), 2);
    }
}
