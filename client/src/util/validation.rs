//! Form validation and field feedback for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs recolor their border while the user types (`field_state` +
//! `FieldState::border_color`); submit handlers run the form-level checks
//! below before any identity call is made. Messages are user-facing French.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const BORDER_NEUTRAL: &str = "rgba(255, 255, 255, 0.1)";
pub const BORDER_VALID: &str = "#ccff00";
pub const BORDER_INVALID: &str = "#ff4400";

pub const MSG_EMAIL_REQUIRED: &str = "Veuillez saisir votre adresse email.";
pub const MSG_EMAIL_INVALID: &str = "Adresse email invalide.";
pub const MSG_PASSWORD_REQUIRED: &str = "Veuillez saisir votre mot de passe.";
pub const MSG_PASSWORD_SHORT: &str = "Le mot de passe doit contenir au moins 6 caractères.";
pub const MSG_PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas.";
pub const MSG_NAME_REQUIRED: &str = "Veuillez saisir votre nom.";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Visual feedback for a single input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldState {
    pub fn border_color(self) -> &'static str {
        match self {
            Self::Neutral => BORDER_NEUTRAL,
            Self::Valid => BORDER_VALID,
            Self::Invalid => BORDER_INVALID,
        }
    }
}

/// What an input accepts, standing in for the browser's own constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text { required: bool },
    Email { required: bool },
    Password { min_len: usize },
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(value))
}

/// Feedback for `value` typed into a field of `kind`.
pub fn field_state(kind: FieldKind, value: &str) -> FieldState {
    let filled = !value.is_empty();
    let valid = match kind {
        FieldKind::Text { required } => filled || !required,
        FieldKind::Email { required } => (filled || !required) && (!filled || is_valid_email(value)),
        FieldKind::Password { min_len } => value.chars().count() >= min_len || !filled,
    };
    match (valid, filled) {
        (false, _) => FieldState::Invalid,
        (true, true) => FieldState::Valid,
        (true, false) => FieldState::Neutral,
    }
}

/// Trimmed, well-formed email or the message to show.
///
/// # Errors
///
/// Returns the French message for a blank or malformed address.
pub fn check_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(MSG_EMAIL_REQUIRED);
    }
    if !is_valid_email(email) {
        return Err(MSG_EMAIL_INVALID);
    }
    Ok(email.to_owned())
}

/// # Errors
///
/// Returns the first failing check's message.
pub fn check_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = check_email(email)?;
    if password.is_empty() {
        return Err(MSG_PASSWORD_REQUIRED);
    }
    Ok((email, password.to_owned()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// # Errors
///
/// Returns the first failing check's message.
pub fn check_register(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(MSG_NAME_REQUIRED);
    }
    let email = check_email(email)?;
    if password.is_empty() {
        return Err(MSG_PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MSG_PASSWORD_SHORT);
    }
    if password != confirm {
        return Err(MSG_PASSWORD_MISMATCH);
    }
    Ok(RegisterInput { full_name: full_name.to_owned(), email, password: password.to_owned() })
}
