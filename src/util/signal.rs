//! Signal writes from async tasks that may outlive their view.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use leptos::prelude::{RwSignal, Set};

/// Write `value` into `signal`, logging when the owning view is already gone.
///
/// Returns `false` if the signal was disposed and the value dropped.
pub fn set_if_live<T>(signal: RwSignal<T>, value: T, what: &str) -> bool
where
    T: Send + Sync + 'static,
{
    if signal.try_set(value).is_some() {
        leptos::logging::log!("{what} dropped: signal disposed before the update landed");
        return false;
    }
    true
}
