//! Field rules for user records.
//!
//! The same functions back the server's request validation and the console's form, so a
//! message shown in the terminal is exactly the message the API would return. Each rule
//! yields the first failing message for its field; fields are checked independently.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const MOBILE_MAX_LEN: usize = 12;
pub const ADDRESS_MAX_LEN: usize = 200;

static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Outcome of a single field rule
pub type RuleResult = Result<(), &'static str>;

/// The five mutable fields of a user, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Mobile,
    Address,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Mobile,
        Field::Address,
    ];

    /// JSON property name, also used as the key in error details
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Address => "address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Mobile => "Mobile",
            Field::Address => "Address",
        }
    }

    /// Runs the rule set that belongs to this field.
    pub fn validate(&self, value: &str) -> RuleResult {
        match self {
            Field::FirstName => validate_first_name(value),
            Field::LastName => validate_last_name(value),
            Field::Email => validate_email(value),
            Field::Mobile => validate_mobile(value),
            Field::Address => validate_address(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Failing fields mapped to their message
pub type FieldErrors = BTreeMap<Field, &'static str>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'')
}

fn too_long(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

struct NameMessages {
    required: &'static str,
    charset: &'static str,
    length: &'static str,
}

const FIRST_NAME: NameMessages = NameMessages {
    required: "First name is required",
    charset: "First name can only contain letters, spaces, hyphens, and apostrophes",
    length: "First name cannot exceed 50 characters",
};

const LAST_NAME: NameMessages = NameMessages {
    required: "Last name is required",
    charset: "Last name can only contain letters, spaces, hyphens, and apostrophes",
    length: "Last name cannot exceed 50 characters",
};

fn validate_name(value: &str, messages: &NameMessages) -> RuleResult {
    if is_blank(value) {
        return Err(messages.required);
    }
    if !value.chars().all(is_name_char) {
        return Err(messages.charset);
    }
    if too_long(value, NAME_MAX_LEN) {
        return Err(messages.length);
    }
    Ok(())
}

pub fn validate_first_name(value: &str) -> RuleResult {
    validate_name(value, &FIRST_NAME)
}

pub fn validate_last_name(value: &str) -> RuleResult {
    validate_name(value, &LAST_NAME)
}

pub fn validate_email(value: &str) -> RuleResult {
    if is_blank(value) {
        return Err("Email address is required");
    }
    if too_long(value, EMAIL_MAX_LEN) {
        return Err("Email address cannot exceed 100 characters");
    }
    if !EMAIL_FORMAT.is_match(value) {
        return Err("Please enter a valid email address format (e.g., user@example.com)");
    }
    if value.contains("..") {
        return Err("Email address cannot contain consecutive dots");
    }
    if value.starts_with('.') || value.ends_with('.') {
        return Err("Email address cannot start or end with a dot");
    }
    if value.contains("@.") || value.contains(".@") {
        return Err("Email address cannot have dots immediately before or after @ symbol");
    }

    // The format check guarantees exactly one '@'.
    let domain = value.split_once('@').map(|(_, d)| d).unwrap_or_default();
    if domain.chars().count() < 3 {
        return Err("Email domain must be at least 3 characters long");
    }
    Ok(())
}

pub fn validate_mobile(value: &str) -> RuleResult {
    if is_blank(value) {
        return Err("Mobile number is required");
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Mobile number must contain only numeric values");
    }
    if too_long(value, MOBILE_MAX_LEN) {
        return Err("Mobile number cannot exceed 12 characters");
    }
    Ok(())
}

pub fn validate_address(value: &str) -> RuleResult {
    if is_blank(value) {
        return Err("Address is required");
    }
    if too_long(value, ADDRESS_MAX_LEN) {
        return Err("Address cannot exceed 200 characters");
    }
    Ok(())
}

/// Drops every character a name may not contain.
pub fn filter_name_input(input: &str) -> String {
    input.chars().filter(|c| is_name_char(*c)).collect()
}

/// Keeps digits only, truncated to the mobile length limit.
pub fn filter_mobile_input(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MOBILE_MAX_LEN)
        .collect()
}
