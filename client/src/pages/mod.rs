//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates form logic to
//! `state` and request sequencing to `net::auth`.

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod register;
