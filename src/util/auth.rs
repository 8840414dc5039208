//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical guard + redirect behavior through
//! `install_route_guard` (usually via `components::require_auth`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionCheck};

/// Start a guard cycle for the current mount and return its observable state.
///
/// The check runs once; when it resolves unauthenticated, `navigate` is
/// called a single time with `login_path`, replacing the history entry.
/// Outside hydrate builds the state stays `Checking`, since the session only
/// lives in the browser.
pub fn install_route_guard<C, F>(check: C, login_path: String, navigate: F) -> RwSignal<AuthState>
where
    C: SessionCheck + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    let state = RwSignal::new(AuthState::checking());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let redirect = |path: &str| navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        let resolved = crate::state::auth::run_guard(
            &check,
            |next| {
                crate::util::signal::set_if_live(state, next, "route guard state");
            },
            redirect,
            &login_path,
        )
        .await;
        leptos::logging::log!("route guard resolved: {:?}", resolved.phase());
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (check, login_path, navigate);
    }

    state
}
