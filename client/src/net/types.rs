//! Wire DTOs for the estate API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's `user_*` JSON keys; the form state keeps
//! plain names and converts at the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub user_email: String,
    pub user_password: String,
}

/// Successful `POST /login` response. A missing or empty token means the
/// login did not establish a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The issued token, ignoring empty strings.
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Successful `GET /verify` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VerifyResponse {
    /// Raw role string; only `seller` and `seeker` are routable. A null or
    /// non-string role decodes as empty so it still reads as unknown.
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: String,
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(role)) => role,
        _ => String::new(),
    })
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub user_email: String,
    pub user_password: String,
    pub user_mobile: String,
    pub user_gender: String,
    pub user_role: String,
}

/// `{message}` payload used both for registration success and for every
/// error response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
