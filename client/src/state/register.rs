//! Registration form state, validation, and submission lifecycle.
//!
//! DESIGN
//! ======
//! Validation runs only at submit time and reports every violated rule at
//! once. The error map is rebuilt from scratch on each pass.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use super::auth::Role;
use crate::net::types::RegisterRequest;
use crate::util::validate::{is_valid_email, is_valid_mobile, is_valid_password};

/// A registration form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Mobile,
    Gender,
    Role,
}

impl Field {
    pub const ALL: [Self; 6] = [Self::Name, Self::Email, Self::Password, Self::Mobile, Self::Gender, Self::Role];

    fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Email => "Email is required",
            Self::Password => "Password is required",
            Self::Mobile => "Mobile number is required",
            Self::Gender => "Gender is required",
            Self::Role => "Role is required",
        }
    }

    fn invalid_message(self) -> Option<&'static str> {
        match self {
            Self::Name => None,
            Self::Email => Some("Invalid email format"),
            Self::Password => Some(
                "Password must be at least 8 characters long, include a letter, a number, and a special character",
            ),
            Self::Mobile => Some("Mobile number must be 10 digits"),
            Self::Gender => Some("Gender must be male, female, or other"),
            Self::Role => Some("Role must be seller or seeker"),
        }
    }

    fn is_well_formed(self, value: &str) -> bool {
        match self {
            Self::Name => true,
            Self::Email => is_valid_email(value),
            Self::Password => is_valid_password(value),
            Self::Mobile => is_valid_mobile(value),
            Self::Gender => Gender::parse(value).is_some(),
            Self::Role => Role::parse(value).is_some(),
        }
    }

    /// Validation message for `value`, or `None` if it satisfies the rule.
    pub fn check(self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            Some(self.required_message())
        } else if self.is_well_formed(value) {
            None
        } else {
            self.invalid_message()
        }
    }
}

/// Gender choices offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Per-field validation messages; a missing key means the field is valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw profile values as typed or selected by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub gender: String,
    pub role: String,
}

impl ProfileForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Mobile => &self.mobile,
            Field::Gender => &self.gender,
            Field::Role => &self.role,
        }
    }

    /// Copy of the form with one field replaced.
    #[must_use]
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Name => &mut next.name,
            Field::Email => &mut next.email,
            Field::Password => &mut next.password,
            Field::Mobile => &mut next.mobile,
            Field::Gender => &mut next.gender,
            Field::Role => &mut next.role,
        };
        *slot = value.into();
        next
    }

    /// Check every field and collect all violations.
    pub fn validate(&self) -> FieldErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| field.check(self.value(field)).map(|message| (field, message)))
            .collect()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            user_name: self.name.clone(),
            user_email: self.email.clone(),
            user_password: self.password.clone(),
            user_mobile: self.mobile.clone(),
            user_gender: self.gender.clone(),
            user_role: self.role.clone(),
        }
    }
}

/// Result of a registration request, applied onto the live form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Accepted, with the backend's confirmation text if it sent one.
    Registered(Option<String>),
    /// Rejected, with the text to display.
    Rejected(String),
}

/// Everything the registration page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterState {
    pub form: ProfileForm,
    pub errors: FieldErrors,
    pub loading: bool,
    /// Backend confirmation after a successful registration.
    pub message: Option<String>,
    /// Banner error after a failed registration.
    pub error: Option<String>,
}

impl RegisterState {
    #[must_use]
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        Self { form: self.form.with(field, value), ..self.clone() }
    }

    /// Clear the previous outcome and validate. Returns the next state and,
    /// when the form is valid, the request to send. A submit while a request
    /// is loading changes nothing.
    #[must_use]
    pub fn begin_submit(&self) -> (Self, Option<RegisterRequest>) {
        if self.loading {
            return (self.clone(), None);
        }
        let errors = self.form.validate();
        let ready = errors.is_empty();
        let next = Self { errors, loading: ready, message: None, error: None, form: self.form.clone() };
        let request = ready.then(|| next.form.to_request());
        (next, request)
    }

    /// Registration accepted: show the confirmation and reset the form.
    #[must_use]
    pub fn succeeded(&self, message: Option<String>) -> Self {
        Self { message, ..Self::default() }
    }

    /// Apply a finished request to this (possibly since edited) state.
    #[must_use]
    pub fn finish(&self, outcome: RegisterOutcome) -> Self {
        match outcome {
            RegisterOutcome::Registered(message) => self.succeeded(message),
            RegisterOutcome::Rejected(error) => self.failed(error),
        }
    }

    /// Registration rejected: keep values and field errors for correction.
    #[must_use]
    pub fn failed(&self, error: impl Into<String>) -> Self {
        Self { loading: false, error: Some(error.into()), ..self.clone() }
    }
}
