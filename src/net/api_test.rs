use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::state::auth::{GuardPhase, run_guard};
use crate::util::storage::MemoryStorage;

fn session_with(token: Option<&str>) -> SessionStore {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()), "access_token");
    if let Some(raw) = token {
        session.set(&Token::new(raw));
    }
    session
}

#[test]
fn endpoints_resolve_under_api_base() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint(LOGIN_PATH), "/api/v1/auth/login");
    assert_eq!(config.endpoint(REGISTER_PATH), "/api/v1/auth/register");
    assert_eq!(config.endpoint(LOGOUT_PATH), "/api/v1/auth/logout");
    assert_eq!(config.endpoint(ME_PATH), "/api/v1/auth/me");
}

#[test]
fn accept_token_rejects_blank_credential() {
    let resp = TokenResponse { access_token: Token::new("  "), token_type: "bearer".to_owned() };
    assert!(matches!(accept_token(resp), Err(ClientError::Decode(_))));
}

#[test]
fn accept_token_passes_real_credential() {
    let resp = TokenResponse { access_token: Token::new("abc"), token_type: "bearer".to_owned() };
    assert_eq!(accept_token(resp), Ok(Token::new("abc")));
}

#[test]
fn rejected_token_is_cleared_only_on_401() {
    let session = session_with(Some("t"));
    forget_rejected_token(&session, &ClientError::Http { status: 500, message: None });
    assert!(session.is_authenticated());
    forget_rejected_token(&session, &ClientError::Http { status: 401, message: None });
    assert!(!session.is_authenticated());
}

#[test]
fn fetch_current_user_without_token_is_unauthorized() {
    let session = session_with(None);
    let result = block_on(fetch_current_user(&ClientConfig::default(), &session));
    assert!(result.is_err_and(|e| e.is_unauthorized()));
}

#[test]
fn logout_clears_local_token() {
    let session = session_with(Some("t"));
    block_on(logout(&ClientConfig::default(), &session));
    assert_eq!(session.get(), None);
}

#[test]
fn server_check_without_token_is_unauthenticated() {
    let check = ServerSessionCheck { config: ClientConfig::default(), session: session_with(None) };
    assert_eq!(block_on(check.check()), Ok(false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_is_unavailable_off_browser() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let result = block_on(login(&ClientConfig::default(), &request));
    assert_eq!(result, Err(ClientError::network("not available on server")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn guard_over_unreachable_server_fails_closed_and_keeps_token() {
    let session = session_with(Some("t"));
    let check = ServerSessionCheck { config: ClientConfig::default(), session: session.clone() };
    let mut redirects = 0;

    let state = block_on(run_guard(&check, |_| {}, |_| redirects += 1, "/login"));

    assert_eq!(state.phase(), GuardPhase::Unauthenticated);
    assert_eq!(redirects, 1);
    assert!(session.is_authenticated());
}
