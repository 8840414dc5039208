//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning an error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ClientError`] via `error_from_response`.
//! Authorized calls answering 401 clear the stored token: the server has
//! declared it invalid.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

#[cfg(any(test, feature = "hydrate"))]
use super::types::TokenResponse;
use super::types::{LoginRequest, RegisterRequest, User};
use crate::config::ClientConfig;
use crate::state::auth::SessionCheck;
use crate::state::session::{SessionStore, Token};
use crate::util::errors::ClientError;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_PATH: &str = "auth/register";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "auth/logout";
#[cfg(any(test, feature = "hydrate"))]
const ME_PATH: &str = "auth/me";

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ClientError {
    ClientError::network("not available on server")
}

/// Reject responses that carry an empty credential.
#[cfg(any(test, feature = "hydrate"))]
fn accept_token(resp: TokenResponse) -> Result<Token, ClientError> {
    if resp.access_token.as_str().trim().is_empty() {
        return Err(ClientError::Decode("empty access token".to_owned()));
    }
    Ok(resp.access_token)
}

/// Drop the stored token when the server rejected it.
fn forget_rejected_token(session: &SessionStore, err: &ClientError) {
    if err.is_unauthorized() {
        leptos::logging::warn!("server rejected session token; clearing it");
        session.clear();
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ClientError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(crate::util::errors::error_from_response(status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_for_token<B: serde::Serialize>(url: &str, body: &B) -> Result<Token, ClientError> {
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    let resp = ensure_ok(resp).await?;
    let parsed: TokenResponse = resp.json().await?;
    accept_token(parsed)
}

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// The caller decides what to do with the token (normally
/// `SessionStore::set`).
///
/// # Errors
///
/// Returns a [`ClientError`] on transport failure, non-2xx status, or a
/// malformed body.
pub async fn login(config: &ClientConfig, request: &LoginRequest) -> Result<Token, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        post_for_token(&config.endpoint(LOGIN_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Create an account and receive a session token via `POST /auth/register`.
///
/// # Errors
///
/// Returns a [`ClientError`] on transport failure, non-2xx status, or a
/// malformed body.
pub async fn register(config: &ClientConfig, request: &RegisterRequest) -> Result<Token, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        post_for_token(&config.endpoint(REGISTER_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Tell the server the session is over. Best effort; the local token is
/// cleared regardless.
pub async fn logout(config: &ClientConfig, session: &SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.get() {
            let sent = gloo_net::http::Request::post(&config.endpoint(LOGOUT_PATH))
                .header("Authorization", &token.bearer())
                .send()
                .await;
            if let Err(e) = sent {
                leptos::logging::warn!("logout request failed: {e}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
    session.clear();
}

/// Fetch the signed-in user via `GET /auth/me`.
///
/// # Errors
///
/// Returns `Http { status: 401, .. }` without a request when no token is
/// stored; other failures as for [`login`]. A 401 from the server also clears
/// the stored token.
pub async fn fetch_current_user(config: &ClientConfig, session: &SessionStore) -> Result<User, ClientError> {
    let Some(token) = session.get() else {
        return Err(ClientError::Http { status: 401, message: None });
    };

    #[cfg(feature = "hydrate")]
    let result = async {
        let resp = gloo_net::http::Request::get(&config.endpoint(ME_PATH))
            .header("Authorization", &token.bearer())
            .send()
            .await?;
        let resp = ensure_ok(resp).await?;
        Ok::<User, ClientError>(resp.json().await?)
    }
    .await;
    #[cfg(not(feature = "hydrate"))]
    let result = {
        let _ = (config, token);
        Err(unavailable())
    };

    if let Err(e) = &result {
        forget_rejected_token(session, e);
    }
    result
}

/// Session check that asks the server whether the stored token is still
/// valid.
///
/// No token means unauthenticated without a request; a 401 means
/// unauthenticated (and the token is cleared); any other failure is an error,
/// which guards treat as unauthenticated.
#[derive(Clone, Debug)]
pub struct ServerSessionCheck {
    pub config: ClientConfig,
    pub session: SessionStore,
}

impl SessionCheck for ServerSessionCheck {
    fn check(&self) -> impl Future<Output = Result<bool, ClientError>> {
        async move {
            if !self.session.is_authenticated() {
                return Ok(false);
            }
            match fetch_current_user(&self.config, &self.session).await {
                Ok(user) => Ok(user.is_active),
                Err(e) if e.is_unauthorized() => Ok(false),
                Err(e) => Err(e),
            }
        }
    }
}
