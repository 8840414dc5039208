use super::*;

type Values = BTreeMap<&'static str, String>;

fn login_values() -> Values {
    BTreeMap::from([("email", String::new()), ("password", String::new())])
}

fn require_all() -> Validator<Values> {
    Arc::new(|values: &Values| {
        values
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(k, _)| (*k, "Required".to_owned()))
            .collect()
    })
}

// =============================================================
// initialize / change / blur
// =============================================================

#[test]
fn new_state_matches_initial_values() {
    let state = FormState::new(login_values());
    assert_eq!(state.values, login_values());
    assert!(state.errors.is_empty());
    assert!(state.touched.is_empty());
    assert!(!state.is_submitting);
    assert!(!state.is_dirty());
}

#[test]
fn handle_change_keeps_last_value_per_field() {
    let mut state = FormState::new(login_values());
    state.handle_change(&"email", "a@b".to_owned());
    state.handle_change(&"email", "a@b.com".to_owned());
    assert_eq!(state.values["email"], "a@b.com");
    assert_eq!(state.values["password"], "");
    assert!(state.is_dirty());
}

#[test]
fn handle_change_without_validator_leaves_errors_empty() {
    let mut state = FormState::new(login_values());
    state.handle_change(&"email", String::new());
    assert!(state.errors.is_empty());
    assert!(state.is_valid());
}

#[test]
fn handle_change_rederives_errors_from_validator() {
    let mut state = FormState::new(login_values()).with_validator(require_all());
    state.handle_change(&"email", "a@b.com".to_owned());
    assert_eq!(state.errors.get("password").map(String::as_str), Some("Required"));
    assert!(!state.errors.contains_key("email"));
}

#[test]
fn handle_blur_marks_field_touched() {
    let mut state = FormState::new(login_values());
    state.handle_blur(&"email");
    state.handle_blur(&"email");
    assert_eq!(state.touched, BTreeSet::from(["email"]));
}

#[test]
fn visible_error_only_for_touched_fields() {
    let mut state = FormState::new(login_values()).with_validator(require_all());
    state.handle_change(&"email", String::new());
    assert_eq!(state.visible_error(&"email"), None);
    state.handle_blur(&"email");
    assert_eq!(state.visible_error(&"email"), Some("Required"));
    assert_eq!(state.visible_error(&"password"), None);
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_restores_initialized_state() {
    let mut state = FormState::new(login_values()).with_validator(require_all());
    state.handle_change(&"email", "x@y.z".to_owned());
    state.handle_blur(&"password");
    state.is_submitting = true;

    state.reset();

    assert_eq!(state.values, login_values());
    assert!(state.errors.is_empty());
    assert!(state.touched.is_empty());
    assert!(!state.is_submitting);
    assert_eq!(state.initial_values(), &login_values());
}

// =============================================================
// begin_submit / finish_submit
// =============================================================

#[test]
fn begin_submit_snapshots_values_and_sets_flag() {
    let mut state = FormState::new(login_values());
    state.handle_change(&"email", "a@b.com".to_owned());
    let gate = state.begin_submit();
    let SubmitGate::Ready(values) = gate else {
        panic!("expected ready gate");
    };
    assert_eq!(values["email"], "a@b.com");
    assert!(state.is_submitting);
}

#[test]
fn begin_submit_while_in_flight_is_busy() {
    let mut state = FormState::new(login_values());
    assert!(matches!(state.begin_submit(), SubmitGate::Ready(_)));
    assert_eq!(state.begin_submit(), SubmitGate::Busy);
    assert!(state.finish_submit(state.submit_generation()));
    assert!(!state.is_submitting);
    assert!(matches!(state.begin_submit(), SubmitGate::Ready(_)));
}

#[test]
fn finish_submit_from_before_reset_leaves_newer_flag() {
    let mut state = FormState::new(login_values());
    assert!(matches!(state.begin_submit(), SubmitGate::Ready(_)));
    let stale = state.submit_generation();
    state.reset();
    assert!(matches!(state.begin_submit(), SubmitGate::Ready(_)));
    assert!(!state.finish_submit(stale));
    assert!(state.is_submitting);
    assert_eq!(state.begin_submit(), SubmitGate::Busy);
}

#[test]
fn begin_submit_with_errors_touches_every_field() {
    let mut state = FormState::new(login_values()).with_validator(require_all());
    assert_eq!(state.begin_submit(), SubmitGate::Invalid);
    assert!(!state.is_submitting);
    assert_eq!(state.touched, BTreeSet::from(["email", "password"]));
    assert_eq!(state.visible_error(&"email"), Some("Required"));
}
