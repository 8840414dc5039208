//! Async submit driver for [`FormState`].
//!
//! CONCURRENCY
//! ===========
//! The in-flight check and the flag flip happen inside one synchronous
//! `update_form` call, so on a cooperative scheduler no second submit can
//! slip in between. `is_submitting` is cleared by a drop guard: it returns to
//! `false` on success, on error, when the future is dropped mid-flight, and
//! when the action panics. The guard carries the submit generation it was
//! issued with, so a submission abandoned by `reset` cannot clear the flag of
//! a newer one.

#[cfg(test)]
#[path = "form_submit_test.rs"]
mod form_submit_test;

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, Aborted};
use leptos::prelude::{RwSignal, Update};

use super::form::{FormFields, FormState, SubmitGate};

/// How a submit attempt ended, when it did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The action ran and returned `Ok`.
    Completed,
    /// A submission was already in flight; the action was not called.
    Skipped,
    /// The validator reported errors; the action was not called.
    Invalid,
    /// The caller aborted the submission.
    Cancelled,
    /// The form state was disposed or already borrowed; nothing was started.
    Unavailable,
}

/// Shared, mutable access to one form's state.
pub trait FormHandle<T: FormFields>: Clone {
    /// Apply `f` to the state. `None` if the state is gone or busy.
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState<T>) -> R) -> Option<R>;
}

impl<T: FormFields> FormHandle<T> for Rc<RefCell<FormState<T>>> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState<T>) -> R) -> Option<R> {
        let mut state = self.try_borrow_mut().ok()?;
        Some(f(&mut state))
    }
}

impl<T> FormHandle<T> for RwSignal<FormState<T>>
where
    T: FormFields + 'static,
    FormState<T>: Send + Sync,
{
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Clears `is_submitting` when dropped, if `generation` still owns it.
struct InFlight<T: FormFields, H: FormHandle<T>> {
    form: H,
    generation: u64,
    _values: PhantomData<fn() -> T>,
}

impl<T: FormFields, H: FormHandle<T>> Drop for InFlight<T, H> {
    fn drop(&mut self) {
        let generation = self.generation;
        match self.form.update_form(|state| state.finish_submit(generation)) {
            Some(true) => {}
            Some(false) => leptos::logging::log!("submit {generation} superseded by reset; flag left to newer submit"),
            None => leptos::logging::warn!("form state unavailable while clearing submit flag"),
        }
    }
}

/// Submit the form's current values through `action`.
///
/// An `Err` from the action is handed back untouched; displaying it is the
/// caller's job. Values are never modified here.
pub async fn submit<T, H, A, Fut, E>(form: &H, action: A) -> Result<SubmitStatus, E>
where
    T: FormFields,
    H: FormHandle<T>,
    A: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let gate = form.update_form(|state| {
        let gate = state.begin_submit();
        (gate, state.submit_generation())
    });
    let (values, generation) = match gate {
        Some((SubmitGate::Ready(values), generation)) => (values, generation),
        Some((SubmitGate::Invalid, _)) => return Ok(SubmitStatus::Invalid),
        Some((SubmitGate::Busy, _)) => return Ok(SubmitStatus::Skipped),
        None => {
            leptos::logging::warn!("form state unavailable; submit not started");
            return Ok(SubmitStatus::Unavailable);
        }
    };
    let _in_flight = InFlight { form: form.clone(), generation, _values: PhantomData };
    action(values).await?;
    Ok(SubmitStatus::Completed)
}

/// Like [`submit`], plus a handle that abandons a hung action.
///
/// Aborting resolves the future to `Ok(SubmitStatus::Cancelled)` and clears
/// `is_submitting`.
pub fn submit_abortable<T, H, A, Fut, E>(form: H, action: A) -> (impl Future<Output = Result<SubmitStatus, E>>, AbortHandle)
where
    T: FormFields,
    H: FormHandle<T>,
    A: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let fut = async move {
        match Abortable::new(submit(&form, action), registration).await {
            Ok(result) => result,
            Err(Aborted) => Ok(SubmitStatus::Cancelled),
        }
    };
    (fut, handle)
}
