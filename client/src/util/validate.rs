//! Field format predicates shared by the login and registration forms.
//!
//! Each predicate answers only "does this value have the right shape";
//! emptiness and the user-facing messages are decided by the form state.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// Symbols of which a password must contain at least one.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern compiles"));

/// `local@domain.tld`: no whitespace anywhere, exactly one `@`, and a `.`
/// with something on both sides after it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight characters including a letter, a digit and one of
/// [`PASSWORD_SYMBOLS`].
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Exactly ten ASCII digits.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}
