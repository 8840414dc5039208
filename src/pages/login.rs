//! Login page: email + password exchanged for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::form::{FieldErrors, FormFields, Validator};
use crate::state::session::SessionStore;
use crate::util::errors::{ClientError, format_error};
use crate::util::form::{submit_handler, use_form};
use crate::util::validate::{email_like, required};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl FormFields for LoginFields {
    type Field = LoginField;
    type Value = String;

    fn fields(&self) -> Vec<LoginField> {
        vec![LoginField::Email, LoginField::Password]
    }

    fn set(&mut self, field: &LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

impl LoginFields {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

pub fn validate_login(values: &LoginFields) -> FieldErrors<LoginField> {
    let mut errors = FieldErrors::new();
    if let Err(msg) = email_like(&values.email) {
        errors.insert(LoginField::Email, msg.to_owned());
    }
    if let Err(msg) = required(&values.password, "Enter your password.") {
        errors.insert(LoginField::Password, msg.to_owned());
    }
    errors
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let validator: Validator<LoginFields> = Arc::new(validate_login);
    let form = use_form(LoginFields::default(), Some(validator));
    let error = RwSignal::new(None::<String>);

    let action = move |values: LoginFields| {
        let config = config.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        async move {
            error.set(None);
            let token = api::login(&config, &values.to_request()).await?;
            session.set(&token);
            navigate(&config.home_path, NavigateOptions::default());
            Ok::<(), ClientError>(())
        }
    };
    let on_submit = submit_handler(form, action, move |e: ClientError| {
        leptos::logging::warn!("login failed: {e}");
        error.set(Some(format_error(&e)));
    });

    let field_error = move |field: LoginField| move || form.with(|f| f.visible_error(&field).map(str::to_owned));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.values.email.clone())
                            on:input=move |ev| form.update(|f| f.handle_change(&LoginField::Email, event_target_value(&ev)))
                            on:blur=move |_| form.update(|f| f.handle_blur(&LoginField::Email))
                        />
                    </label>
                    <p class="field-error">{field_error(LoginField::Email)}</p>
                    <label class="auth-label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.values.password.clone())
                            on:input=move |ev| form.update(|f| f.handle_change(&LoginField::Password, event_target_value(&ev)))
                            on:blur=move |_| form.update(|f| f.handle_blur(&LoginField::Password))
                        />
                    </label>
                    <p class="field-error">{field_error(LoginField::Password)}</p>
                    <button class="auth-button" type="submit" disabled=move || form.with(|f| f.is_submitting)>
                        {move || if form.with(|f| f.is_submitting) { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                {move || error.get().map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })}
                <p class="auth-switch">
                    "No account yet? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
