//! Leptos bindings for the form engine.
//!
//! Pages keep a `RwSignal<FormState<_>>` and wire DOM events through these
//! helpers so every form shares the same submit semantics.

use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::form::{FormFields, FormState, Validator};

/// Create the reactive state for a newly mounted form.
pub fn use_form<T>(initial: T, validator: Option<Validator<T>>) -> RwSignal<FormState<T>>
where
    T: FormFields + 'static,
    FormState<T>: Send + Sync,
{
    let state = FormState::new(initial);
    RwSignal::new(match validator {
        Some(validator) => state.with_validator(validator),
        None => state,
    })
}

/// `on:submit` handler: suppresses the browser submission, then runs
/// `action` through the form engine.
///
/// Errors from `action` go to `on_error`; the engine itself never swallows
/// or displays them.
pub fn submit_handler<T, A, Fut, E, F>(form: RwSignal<FormState<T>>, action: A, on_error: F) -> impl Fn(SubmitEvent) + Clone + 'static
where
    T: FormFields + 'static,
    FormState<T>: Send + Sync,
    A: Fn(T) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<(), E>> + 'static,
    E: 'static,
    F: Fn(E) + Clone + 'static,
{
    move |ev: SubmitEvent| {
        ev.prevent_default();
        let action = action.clone();
        let on_error = on_error.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::form_submit::{SubmitStatus, submit};

            match submit(&form, action).await {
                Ok(SubmitStatus::Skipped) => leptos::logging::log!("submit ignored: already in flight"),
                Ok(_) => {}
                Err(e) => on_error(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, action, on_error);
        }
    }
}
