//! Wrapper that renders its children only for signed-in visitors.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::GuardPhase;
use crate::state::session::SessionStore;
use crate::util::auth::install_route_guard;

/// Gate protected content behind the session guard.
///
/// Shows a neutral loading indicator while checking, the children once
/// authenticated, and nothing at all while redirecting to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let guard = install_route_guard(session, config.login_path, use_navigate());

    move || match guard.get().phase() {
        GuardPhase::Checking => view! {
            <div class="guard-loading" aria-busy="true">
                <span class="guard-loading__spinner"></span>
            </div>
        }
        .into_any(),
        GuardPhase::Authenticated => children().into_any(),
        GuardPhase::Unauthenticated => ().into_any(),
    }
}
