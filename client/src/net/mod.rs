//! Networking modules for the estate REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` performs the HTTP calls, and `auth`
//! sequences those calls into the login, session bootstrap and registration
//! workflows.

pub mod api;
pub mod auth;
pub mod types;
