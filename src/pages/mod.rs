//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; protected pages are wrapped in
//! `components::require_auth` by the router rather than guarding themselves.

pub mod dashboard;
pub mod login;
pub mod register;
