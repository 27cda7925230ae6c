//! Input validation for the interactive session.
//!
//! Each validator returns a typed outcome instead of an error; the prompt
//! loops in the session consume the failure variants and re-prompt. Nothing
//! here ever propagates past a prompt.

use regex::Regex;
use std::sync::OnceLock;

/// Outcome of parsing a whole number from a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntInput {
    Valid(i64),
    Negative,
    NotANumber,
}

/// Parse a non-negative integer. No trimming: the operator types the number
/// and nothing else.
pub fn parse_nonnegative_int(raw: &str) -> IntInput {
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => IntInput::Valid(n),
        Ok(_) => IntInput::Negative,
        Err(_) => IntInput::NotANumber,
    }
}

/// Outcome of validating a first or last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    Valid(String),
    Blank,
    NotLetters,
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[a-zA-Z]+$").unwrap())
}

/// Letters only, returned capitalized: first letter upper, rest lower.
pub fn parse_name(raw: &str) -> NameInput {
    let name = raw.trim();
    if name.is_empty() {
        return NameInput::Blank;
    }
    if !name_pattern().is_match(name) {
        return NameInput::NotLetters;
    }
    // The pattern guarantees ASCII, so byte slicing is safe here.
    let capitalized = name[..1].to_uppercase() + &name[1..].to_lowercase();
    NameInput::Valid(capitalized)
}

/// Outcome of validating a social security number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsnInput {
    Valid(String),
    Blank,
    BadFormat,
}

fn ssn_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // YYMMDD-XXXX with MM 01-12 and DD 01-31. The stricter of the two
    // historical checks for this field; see DESIGN.md.
    RE.get_or_init(|| {
        Regex::new(r"^\d{2}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])-\d{4}$").unwrap()
    })
}

pub fn parse_ssn(raw: &str) -> SsnInput {
    let ssn = raw.trim();
    if ssn.is_empty() {
        return SsnInput::Blank;
    }
    if !ssn_pattern().is_match(ssn) {
        return SsnInput::BadFormat;
    }
    SsnInput::Valid(ssn.to_string())
}

/// Outcome of validating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordInput {
    Valid(String),
    TooShort,
}

/// At least 6 characters; no other constraint.
pub fn parse_password(raw: &str) -> PasswordInput {
    if raw.chars().count() < 6 {
        PasswordInput::TooShort
    } else {
        PasswordInput::Valid(raw.to_string())
    }
}

/// Outcome of validating a manually chosen account name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameInput {
    Valid(String),
    Blank,
}

/// Any non-blank string goes; this prompt only runs during collision
/// resolution and carries no format rule of its own.
pub fn parse_username(raw: &str) -> UsernameInput {
    let name = raw.trim();
    if name.is_empty() {
        UsernameInput::Blank
    } else {
        UsernameInput::Valid(name.to_string())
    }
}

/// Default account name: up to the first three characters of the first name
/// followed by up to the first three of the last name. Uniform min(3, length)
/// rule, counted in chars.
pub fn default_account_name(first_name: &str, last_name: &str) -> String {
    let mut name: String = first_name.chars().take(3).collect();
    name.extend(last_name.chars().take(3));
    name
}
