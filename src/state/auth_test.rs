use std::cell::RefCell;
use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::state::session::Token;
use crate::util::storage::MemoryStorage;

fn store_with(token: Option<&str>) -> SessionStore {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()), "access_token");
    if let Some(raw) = token {
        store.set(&Token::new(raw));
    }
    store
}

struct FailingCheck;

impl SessionCheck for FailingCheck {
    fn check(&self) -> impl Future<Output = Result<bool, ClientError>> {
        ready(Err(ClientError::network("offline")))
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_checking() {
    let state = AuthState::default();
    assert!(state.is_checking);
    assert!(!state.is_authenticated);
    assert_eq!(state.phase(), GuardPhase::Checking);
    assert!(!state.may_render());
}

#[test]
fn should_not_redirect_while_checking() {
    assert!(!should_redirect_unauth(&AuthState::checking()));
}

#[test]
fn should_redirect_when_resolved_without_session() {
    assert!(should_redirect_unauth(&AuthState::resolved(false)));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = AuthState::resolved(true);
    assert!(!should_redirect_unauth(&state));
    assert!(state.may_render());
}

// =============================================================
// run_guard
// =============================================================

#[test]
fn guard_without_token_redirects_exactly_once() {
    let store = store_with(None);
    let published = RefCell::new(Vec::new());
    let navigations = RefCell::new(Vec::new());

    let final_state = block_on(run_guard(
        &store,
        |s| published.borrow_mut().push(s),
        |path| navigations.borrow_mut().push(path.to_owned()),
        "/login",
    ));

    assert_eq!(final_state, AuthState { is_checking: false, is_authenticated: false });
    assert_eq!(*published.borrow(), vec![AuthState::checking(), AuthState::resolved(false)]);
    assert_eq!(*navigations.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn guard_with_token_admits_without_navigation() {
    let store = store_with(Some("t"));
    let navigations = RefCell::new(0);

    let final_state = block_on(run_guard(&store, |_| {}, |_| *navigations.borrow_mut() += 1, "/login"));

    assert_eq!(final_state, AuthState { is_checking: false, is_authenticated: true });
    assert_eq!(*navigations.borrow(), 0);
}

#[test]
fn guard_fails_closed_when_check_errors() {
    let navigations = RefCell::new(Vec::new());

    let final_state = block_on(run_guard(
        &FailingCheck,
        |_| {},
        |path| navigations.borrow_mut().push(path.to_owned()),
        "/signin",
    ));

    assert_eq!(final_state.phase(), GuardPhase::Unauthenticated);
    assert_eq!(*navigations.borrow(), vec!["/signin".to_owned()]);
}

#[test]
fn guard_decision_is_not_cached_between_cycles() {
    let store = store_with(Some("t"));
    let first = block_on(run_guard(&store, |_| {}, |_| {}, "/login"));
    store.clear();
    let second = block_on(run_guard(&store, |_| {}, |_| {}, "/login"));
    assert!(first.is_authenticated);
    assert!(!second.is_authenticated);
}
