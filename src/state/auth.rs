//! Route-guard state for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages mount a guard that checks the session once, then either
//! renders its content or sends the visitor to the login route.
//!
//! DESIGN
//! ======
//! The check is asynchronous even though the default [`SessionCheck`] (the
//! session store) answers synchronously, so a server-backed check can be
//! dropped in without changing what views observe. The decision is committed
//! once per mount; a token change while mounted is not re-evaluated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::{Future, ready};

use crate::state::session::SessionStore;
use crate::util::errors::ClientError;

/// Phase of a single guard mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Observable guard state exposed to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_checking: bool,
    pub is_authenticated: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::checking()
    }
}

impl AuthState {
    pub fn checking() -> Self {
        Self { is_checking: true, is_authenticated: false }
    }

    pub fn resolved(is_authenticated: bool) -> Self {
        Self { is_checking: false, is_authenticated }
    }

    pub fn phase(&self) -> GuardPhase {
        match (self.is_checking, self.is_authenticated) {
            (true, _) => GuardPhase::Checking,
            (false, true) => GuardPhase::Authenticated,
            (false, false) => GuardPhase::Unauthenticated,
        }
    }

    /// Protected content may render only after a positive decision.
    pub fn may_render(&self) -> bool {
        self.phase() == GuardPhase::Authenticated
    }
}

/// Redirect once the check has finished without a session.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.phase() == GuardPhase::Unauthenticated
}

/// Source of truth consulted by a guard.
pub trait SessionCheck {
    /// `Ok(true)` when the visitor counts as signed in.
    fn check(&self) -> impl Future<Output = Result<bool, ClientError>>;
}

impl SessionCheck for SessionStore {
    fn check(&self) -> impl Future<Output = Result<bool, ClientError>> {
        ready(Ok(self.is_authenticated()))
    }
}

/// Run one guard cycle: publish `Checking`, consult `check`, publish the
/// terminal state and navigate to `login_path` when unauthenticated.
///
/// A failing check is treated as unauthenticated.
pub async fn run_guard<C, S, N>(check: &C, mut publish: S, navigate: N, login_path: &str) -> AuthState
where
    C: SessionCheck,
    S: FnMut(AuthState),
    N: FnOnce(&str),
{
    publish(AuthState::checking());
    let authenticated = match check.check().await {
        Ok(authenticated) => authenticated,
        Err(e) => {
            leptos::logging::warn!("session check failed, denying access: {e}");
            false
        }
    };
    let state = AuthState::resolved(authenticated);
    publish(state);
    if should_redirect_unauth(&state) {
        navigate(login_path);
    }
    state
}
