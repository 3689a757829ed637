//! Validation schemas for the login and registration forms.
//!
//! Each validator is a pure function from a candidate value to either the
//! typed request or a map of per-field messages. The [`Schema`] impls adapt
//! raw form text to those candidates; blank optional inputs count as absent.

use super::types::{Credentials, Registration};
use regex::Regex;
use std::{collections::BTreeMap, fmt};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 8;
pub const DISPLAY_NAME_MAX: usize = 100;

const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_]+$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Raw text of every field of a form, keyed by field.
pub type FieldValues<F> = BTreeMap<F, String>;

/// Field-scoped validation messages; at most one message per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records `message` unless the field already failed an earlier rule.
    pub fn add(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl<F: Ord + Copy> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape and constraints of one form.
pub trait Schema {
    type Field: Copy + Ord + fmt::Debug + Send + Sync + 'static;
    type Output;

    /// Every field, in display order.
    const FIELDS: &'static [Self::Field];

    fn validate(values: &FieldValues<Self::Field>) -> Result<Self::Output, FieldErrors<Self::Field>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    /// Element id used for the matching input.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Username,
    Password,
    Email,
    DisplayName,
}

impl RegisterField {
    /// Element id used for the matching input.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn name(self) -> &'static str {
        match self {
            RegisterField::Username => "username",
            RegisterField::Password => "password",
            RegisterField::Email => "email",
            RegisterField::DisplayName => "displayName",
        }
    }
}

/// Registration candidate before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// Login only checks presence; the backend decides whether credentials match.
pub fn validate_credentials(input: &Credentials) -> Result<Credentials, FieldErrors<LoginField>> {
    let mut errors = FieldErrors::new();
    let email = input.email.trim();

    if email.is_empty() {
        errors.add(LoginField::Email, "Email is required");
    }
    if input.password.is_empty() {
        errors.add(LoginField::Password, "Password is required");
    }

    errors.into_result(Credentials {
        email: email.to_string(),
        password: input.password.clone(),
    })
}

pub fn validate_registration(
    input: &RegisterInput,
) -> Result<Registration, FieldErrors<RegisterField>> {
    let mut errors = FieldErrors::new();

    let username_len = input.username.chars().count();
    if username_len < USERNAME_MIN {
        errors.add(
            RegisterField::Username,
            format!("Username must be at least {USERNAME_MIN} characters"),
        );
    } else if username_len > USERNAME_MAX {
        errors.add(
            RegisterField::Username,
            format!("Username must be at most {USERNAME_MAX} characters"),
        );
    } else if !matches(USERNAME_PATTERN, &input.username) {
        errors.add(
            RegisterField::Username,
            "Username can only contain letters, numbers, and underscores",
        );
    }

    if input.password.chars().count() < PASSWORD_MIN {
        errors.add(
            RegisterField::Password,
            format!("Password must be at least {PASSWORD_MIN} characters"),
        );
    }

    if let Some(email) = &input.email {
        if !matches(EMAIL_PATTERN, email) {
            errors.add(RegisterField::Email, "Invalid email format");
        }
    }

    if let Some(display_name) = &input.display_name {
        let len = display_name.chars().count();
        if len == 0 {
            errors.add(RegisterField::DisplayName, "Display name cannot be empty");
        } else if len > DISPLAY_NAME_MAX {
            errors.add(
                RegisterField::DisplayName,
                format!("Display name must be at most {DISPLAY_NAME_MAX} characters"),
            );
        }
    }

    errors.into_result(Registration {
        username: input.username.clone(),
        password: input.password.clone(),
        email: input.email.clone(),
        display_name: input.display_name.clone(),
    })
}

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|regex| regex.is_match(value))
}

pub struct LoginSchema;

impl Schema for LoginSchema {
    type Field = LoginField;
    type Output = Credentials;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password];

    fn validate(values: &FieldValues<LoginField>) -> Result<Credentials, FieldErrors<LoginField>> {
        validate_credentials(&Credentials {
            email: text(values, LoginField::Email),
            password: text(values, LoginField::Password),
        })
    }
}

pub struct RegisterSchema;

impl Schema for RegisterSchema {
    type Field = RegisterField;
    type Output = Registration;

    const FIELDS: &'static [RegisterField] = &[
        RegisterField::Username,
        RegisterField::Password,
        RegisterField::Email,
        RegisterField::DisplayName,
    ];

    fn validate(
        values: &FieldValues<RegisterField>,
    ) -> Result<Registration, FieldErrors<RegisterField>> {
        validate_registration(&RegisterInput {
            username: text(values, RegisterField::Username),
            password: text(values, RegisterField::Password),
            email: optional_text(values, RegisterField::Email),
            display_name: optional_text(values, RegisterField::DisplayName),
        })
    }
}

fn text<F: Ord>(values: &FieldValues<F>, field: F) -> String {
    values.get(&field).cloned().unwrap_or_default()
}

fn optional_text<F: Ord>(values: &FieldValues<F>, field: F) -> Option<String> {
    values
        .get(&field)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            password: password.to_string(),
            ..RegisterInput::default()
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = validate_credentials(&Credentials {
            email: "   ".to_string(),
            password: String::new(),
        })
        .unwrap_err();

        assert_eq!(errors.get(LoginField::Email), Some("Email is required"));
        assert_eq!(errors.get(LoginField::Password), Some("Password is required"));
    }

    #[test]
    fn login_trims_email_but_not_password() {
        let credentials = validate_credentials(&Credentials {
            email: " a@b.co ".to_string(),
            password: " secret ".to_string(),
        })
        .unwrap();

        assert_eq!(credentials.email, "a@b.co");
        assert_eq!(credentials.password, " secret ");
    }

    #[test]
    fn username_length_bounds() {
        let rejected = [
            String::new(),
            "a".to_string(),
            "ab".to_string(),
            "x".repeat(31),
            "y".repeat(64),
        ];
        for username in &rejected {
            let errors = validate_registration(&registration(username, "longenough")).unwrap_err();
            let message = errors.get(RegisterField::Username).unwrap();
            assert!(message.starts_with("Username must be"), "{username}: {message}");
        }

        for username in ["abc".to_string(), "z".repeat(30)] {
            assert!(validate_registration(&registration(&username, "longenough")).is_ok());
        }
    }

    #[test]
    fn username_rejects_characters_outside_the_allowed_set() {
        for username in ["has space", "dash-ed", "dot.ted", "émile", "semi;colon", "tab\tbed"] {
            let errors = validate_registration(&registration(username, "longenough")).unwrap_err();
            assert_eq!(
                errors.get(RegisterField::Username),
                Some("Username can only contain letters, numbers, and underscores"),
                "{username}"
            );
        }

        assert!(validate_registration(&registration("Alice_2024", "longenough")).is_ok());
    }

    #[test]
    fn short_username_reports_length_before_charset() {
        let errors = validate_registration(&registration("a!", "longenough")).unwrap_err();
        assert_eq!(
            errors.get(RegisterField::Username),
            Some("Username must be at least 3 characters")
        );
    }

    #[test]
    fn password_needs_eight_characters() {
        let errors = validate_registration(&registration("alice", "1234567")).unwrap_err();
        assert_eq!(
            errors.get(RegisterField::Password),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(errors.get(RegisterField::Username), None);

        assert!(validate_registration(&registration("alice", "12345678")).is_ok());
    }

    #[test]
    fn optional_email_is_checked_only_when_present() {
        let mut input = registration("alice", "longenough");
        assert!(validate_registration(&input).is_ok());

        input.email = Some("not-an-email".to_string());
        let errors = validate_registration(&input).unwrap_err();
        assert_eq!(errors.get(RegisterField::Email), Some("Invalid email format"));

        input.email = Some("alice@example.com".to_string());
        assert_eq!(
            validate_registration(&input).unwrap().email.as_deref(),
            Some("alice@example.com")
        );
    }

    #[test]
    fn display_name_bounds() {
        let mut input = registration("alice", "longenough");

        input.display_name = Some(String::new());
        assert_eq!(
            validate_registration(&input)
                .unwrap_err()
                .get(RegisterField::DisplayName),
            Some("Display name cannot be empty")
        );

        input.display_name = Some("d".repeat(101));
        assert_eq!(
            validate_registration(&input)
                .unwrap_err()
                .get(RegisterField::DisplayName),
            Some("Display name must be at most 100 characters")
        );

        input.display_name = Some("d".repeat(100));
        assert!(validate_registration(&input).is_ok());
    }

    #[test]
    fn register_schema_treats_blank_optionals_as_absent() {
        let values = FieldValues::from([
            (RegisterField::Username, "alice".to_string()),
            (RegisterField::Password, "longenough".to_string()),
            (RegisterField::Email, "   ".to_string()),
            (RegisterField::DisplayName, String::new()),
        ]);

        let registration = RegisterSchema::validate(&values).unwrap();
        assert_eq!(registration.email, None);
        assert_eq!(registration.display_name, None);
    }

    #[test]
    fn register_schema_collects_every_failing_field() {
        let values = FieldValues::from([
            (RegisterField::Username, "a b".to_string()),
            (RegisterField::Password, "short".to_string()),
            (RegisterField::Email, "nope".to_string()),
        ]);

        let errors = RegisterSchema::validate(&values).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![RegisterField::Username, RegisterField::Password, RegisterField::Email]
        );
    }
}
