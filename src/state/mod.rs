//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `form`) so pages and
//! components depend on small focused models. Reactive wiring lives in
//! `util`; everything here runs without a browser.

pub mod auth;
pub mod form;
pub mod form_submit;
pub mod session;
