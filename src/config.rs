//! Client configuration resolved at build time.
//!
//! WASM bundles have no process environment, so overrides are read with
//! `option_env!` when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api/v1";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Paths and storage keys shared by the session, guard and API layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for REST endpoints, without a trailing slash.
    pub api_base: String,
    /// Where unauthenticated visitors are sent.
    pub login_path: String,
    /// Where a successful login lands.
    pub home_path: String,
    /// Storage key holding the session token.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time overrides.
    ///
    /// Optional:
    /// - `AUTH_CLIENT_API_BASE`: default `/api/v1`
    /// - `AUTH_CLIENT_TOKEN_KEY`: default `access_token`
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("AUTH_CLIENT_API_BASE"), option_env!("AUTH_CLIENT_TOKEN_KEY"))
    }

    fn from_overrides(api_base: Option<&str>, token_key: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = non_blank(api_base)
            .map(|base| base.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let token_key = non_blank(token_key).map_or(defaults.token_key, str::to_owned);
        Self { api_base, token_key, ..Self::default() }
    }

    /// Absolute endpoint path for `path` under `api_base`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
