//! Route paths shared by navigation, redirects and the router table.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const LOGOUT: &str = "/logout";
pub const SEEKER_DASHBOARD: &str = "/dashboard";
pub const SELLER_DASHBOARD: &str = "/dashboardSeller";
pub const SELLER_PROPERTY: &str = "/Property";
pub const SELLER_INTERESTED: &str = "/interestedSeller";
