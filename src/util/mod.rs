//! Glue between the session/form state machines and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` backs the session token, `auth` mounts the route guard, `form`
//! wires a `FormState` signal to submit events, and `signal` guards writes
//! from tasks that outlive their view. `errors` and `validate` are pure and
//! shared by pages and the net layer.

pub mod auth;
pub mod errors;
pub mod form;
pub mod signal;
pub mod storage;
pub mod validate;
