//! Reusable view components.

pub mod require_auth;
