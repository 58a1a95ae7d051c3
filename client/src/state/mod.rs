//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Form state is a plain value replaced wholesale on every edit; validation
//! is a pure function of that value. Pages hold these values in signals.

pub mod auth;
pub mod login;
pub mod register;
