//! Generic form state: values, validation, touch tracking and submit gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, register and any other input screen hold one `FormState` per
//! mounted form. The async submit driver lives in `form_submit`; this module
//! is the synchronous state machine it steps through.
//!
//! DESIGN
//! ======
//! Field records are statically typed via [`FormFields`]. Errors are always
//! re-derived from `values` by the optional validator, never edited in place.
//! Showing an error only for touched fields is a display policy; the engine
//! just tracks `touched` and offers [`FormState::visible_error`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// A record of named form fields.
pub trait FormFields: Clone + PartialEq {
    type Field: Clone + Ord + fmt::Debug;
    type Value;

    /// Every field of the record, in display order.
    fn fields(&self) -> Vec<Self::Field>;

    fn set(&mut self, field: &Self::Field, value: Self::Value);
}

impl<K, V> FormFields for BTreeMap<K, V>
where
    K: Clone + Ord + fmt::Debug,
    V: Clone + PartialEq,
{
    type Field = K;
    type Value = V;

    fn fields(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn set(&mut self, field: &K, value: V) {
        self.insert(field.clone(), value);
    }
}

/// Messages keyed by field. Empty means valid.
pub type FieldErrors<F> = BTreeMap<F, String>;

/// Pure function from values to field errors.
pub type Validator<T> = Arc<dyn Fn(&T) -> FieldErrors<<T as FormFields>::Field> + Send + Sync>;

/// Result of trying to start a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitGate<T> {
    /// Another submission is in flight; the attempt is dropped.
    Busy,
    /// The validator rejected the values; every field is now touched.
    Invalid,
    /// Submission started with this snapshot of the values.
    Ready(T),
}

/// State of one mounted form.
#[derive(Clone)]
pub struct FormState<T: FormFields> {
    pub values: T,
    pub errors: FieldErrors<T::Field>,
    pub touched: BTreeSet<T::Field>,
    pub is_submitting: bool,
    initial: T,
    validator: Option<Validator<T>>,
    /// Bumped on every `begin_submit` and `reset`; only the submission that
    /// owns the current generation may clear `is_submitting`.
    submit_generation: u64,
}

impl<T> fmt::Debug for FormState<T>
where
    T: FormFields + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("is_submitting", &self.is_submitting)
            .field("submit_generation", &self.submit_generation)
            .field("has_validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: FormFields> FormState<T> {
    /// Fresh state seeded with `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            values: initial.clone(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            is_submitting: false,
            initial,
            validator: None,
            submit_generation: 0,
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator<T>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn initial_values(&self) -> &T {
        &self.initial
    }

    pub fn handle_change(&mut self, field: &T::Field, value: T::Value) {
        self.values.set(field, value);
        self.revalidate();
    }

    pub fn handle_blur(&mut self, field: &T::Field) {
        self.touched.insert(field.clone());
        self.revalidate();
    }

    /// Error for `field`, but only once the user has left it.
    pub fn visible_error(&self, field: &T::Field) -> Option<&str> {
        if !self.touched.contains(field) {
            return None;
        }
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Back to the freshly-initialized state. The validator is kept.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
        self.is_submitting = false;
        self.submit_generation = self.submit_generation.wrapping_add(1);
    }

    /// Check-and-set the in-flight flag as one step.
    pub fn begin_submit(&mut self) -> SubmitGate<T> {
        if self.is_submitting {
            return SubmitGate::Busy;
        }
        self.revalidate();
        if !self.errors.is_empty() {
            self.touched.extend(self.values.fields());
            return SubmitGate::Invalid;
        }
        self.is_submitting = true;
        self.submit_generation = self.submit_generation.wrapping_add(1);
        SubmitGate::Ready(self.values.clone())
    }

    /// Generation of the latest `begin_submit` or `reset`.
    pub fn submit_generation(&self) -> u64 {
        self.submit_generation
    }

    /// Clear the in-flight flag if `generation` still owns it.
    ///
    /// Returns `false` when a `reset` (and possibly a newer submission) has
    /// happened since, in which case the flag is left alone.
    pub fn finish_submit(&mut self, generation: u64) -> bool {
        if generation != self.submit_generation {
            return false;
        }
        self.is_submitting = false;
        true
    }

    fn revalidate(&mut self) {
        if let Some(validator) = &self.validator {
            self.errors = validator(&self.values);
        }
    }
}
