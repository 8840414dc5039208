//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside `RequireAuth`, so it only renders for a present session.
//! It loads the user profile for the greeting and offers logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::User;
use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let user = RwSignal::new(None::<User>);

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user(&config, &session).await {
                Ok(me) => {
                    crate::util::signal::set_if_live(user, Some(me), "profile");
                }
                Err(e) => leptos::logging::warn!("profile fetch failed: {e}"),
            }
        });
    }

    let on_logout = move |_| {
        let config = config.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&config, &session).await;
            navigate(&config.login_path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    };

    let greeting = move || {
        user.with(|u| match u {
            Some(u) => format!("Signed in as {}", u.display_name()),
            None => "Signed in".to_owned(),
        })
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <span class="dashboard__greeting">{greeting}</span>
                <span class="dashboard__spacer"></span>
                <button class="btn dashboard__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
        </div>
    }
}
