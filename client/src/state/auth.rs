//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend decides a user's role at verification time; the client only
//! maps it onto a dashboard route and never stores it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes;

/// Surfaced when a verified session carries a role outside [`Role`].
pub const UNKNOWN_ROLE_MESSAGE: &str = "Unknown user role";

/// Server-assigned user category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Seller,
    Seeker,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Seller, Self::Seeker];

    /// Parse the backend's role string. Matching is exact.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "seller" => Some(Self::Seller),
            "seeker" => Some(Self::Seeker),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::Seeker => "seeker",
        }
    }

    /// Dashboard a verified user of this role lands on.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Seller => routes::SELLER_DASHBOARD,
            Self::Seeker => routes::SEEKER_DASHBOARD,
        }
    }
}
