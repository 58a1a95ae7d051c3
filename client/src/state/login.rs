//! Login form state and the login workflow's phase machine.
//!
//! DESIGN
//! ======
//! The email format is re-checked on every edit so the submit control can be
//! disabled eagerly. Submission walks
//! `Idle -> Submitting -> Verifying -> Redirected | Failed`; the session
//! bootstrap check jumps straight to a terminal phase.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::auth::{Role, UNKNOWN_ROLE_MESSAGE};
use crate::net::types::LoginRequest;
use crate::util::validate::is_valid_email;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const LOGIN_FAILED: &str = "Login failed";
pub const INVALID_TOKEN: &str = "Invalid token";

/// Email/password credentials plus their field errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
}

impl LoginForm {
    /// Replace the email and re-run the format check against it.
    #[must_use]
    pub fn with_email(&self, email: impl Into<String>) -> Self {
        let email = email.into();
        let email_error = (!is_valid_email(&email)).then_some(EMAIL_INVALID);
        Self { email, email_error, ..self.clone() }
    }

    /// Replace the password. A "required" error disappears once the field
    /// is non-empty again.
    #[must_use]
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        let password = password.into();
        let password_error = self.password_error.filter(|_| password.is_empty());
        Self { password, password_error, ..self.clone() }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.email_error.is_none() && !self.email.is_empty() && !self.password.is_empty()
    }

    /// Produce the request to send, or the form annotated with the reasons
    /// submission is blocked.
    ///
    /// # Errors
    ///
    /// Returns the updated form when the email is invalid or either field
    /// is empty.
    pub fn submit(&self) -> Result<LoginRequest, Self> {
        if self.can_submit() {
            return Ok(LoginRequest { user_email: self.email.clone(), user_password: self.password.clone() });
        }
        let mut blocked = self.clone();
        if blocked.email.is_empty() {
            blocked.email_error = Some(EMAIL_REQUIRED);
        }
        if blocked.password.is_empty() {
            blocked.password_error = Some(PASSWORD_REQUIRED);
        }
        Err(blocked)
    }
}

/// Where the login workflow currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    /// Credentials posted, awaiting the token.
    Submitting,
    /// Token stored, awaiting the role.
    Verifying,
    /// Verified; the user belongs on this role's dashboard.
    Redirected(Role),
    /// Terminal failure with the message to display.
    Failed(String),
}

impl LoginPhase {
    /// Terminal phase for a verified session reporting `raw_role`.
    pub fn for_role(raw_role: &str) -> Self {
        Role::parse(raw_role).map_or_else(|| Self::Failed(UNKNOWN_ROLE_MESSAGE.to_owned()), Self::Redirected)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// A request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting | Self::Verifying)
    }

    /// A new submit may start; submits while loading are ignored.
    pub fn accepts_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Phase after the mount-time session check resolves with `outcome`.
    /// A submit already in flight keeps its phase.
    #[must_use]
    pub fn with_bootstrap(&self, outcome: Self) -> Self {
        if self.is_loading() { self.clone() } else { outcome }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Redirected(_) | Self::Failed(_))
    }

    /// Banner error to display, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Route to navigate to, if verification succeeded.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Redirected(role) => Some(role.dashboard_path()),
            _ => None,
        }
    }
}
