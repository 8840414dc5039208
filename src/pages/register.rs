//! Registration page. Creates the account and signs in with the returned
//! token.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::state::form::{FieldErrors, FormFields, FormState, Validator};
use crate::state::session::SessionStore;
use crate::util::errors::{ClientError, format_error};
use crate::util::form::{submit_handler, use_form};
use crate::util::validate::{MIN_PASSWORD_LEN, email_like, min_len, required};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegisterField {
    Name,
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormFields for RegisterFields {
    type Field = RegisterField;
    type Value = String;

    fn fields(&self) -> Vec<RegisterField> {
        vec![RegisterField::Name, RegisterField::Email, RegisterField::Password]
    }

    fn set(&mut self, field: &RegisterField, value: String) {
        match field {
            RegisterField::Name => self.name = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = value,
        }
    }
}

impl RegisterFields {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

pub fn validate_register(values: &RegisterFields) -> FieldErrors<RegisterField> {
    let checks = [
        (RegisterField::Name, required(&values.name, "Enter your name.")),
        (RegisterField::Email, email_like(&values.email)),
        (
            RegisterField::Password,
            min_len(&values.password, MIN_PASSWORD_LEN, "Use at least 8 characters."),
        ),
    ];
    checks
        .into_iter()
        .filter_map(|(field, check)| check.err().map(|msg| (field, msg.to_owned())))
        .collect()
}

fn text_input(
    form: RwSignal<FormState<RegisterFields>>,
    field: RegisterField,
    kind: &'static str,
    autocomplete: &'static str,
) -> impl IntoView {
    let value = move || {
        form.with(|f| match field {
            RegisterField::Name => f.values.name.clone(),
            RegisterField::Email => f.values.email.clone(),
            RegisterField::Password => f.values.password.clone(),
        })
    };
    view! {
        <input
            class="auth-input"
            type=kind
            autocomplete=autocomplete
            prop:value=value
            on:input=move |ev| form.update(|f| f.handle_change(&field, event_target_value(&ev)))
            on:blur=move |_| form.update(|f| f.handle_blur(&field))
        />
        <p class="field-error">{move || form.with(|f| f.visible_error(&field).map(str::to_owned))}</p>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let validator: Validator<RegisterFields> = Arc::new(validate_register);
    let form = use_form(RegisterFields::default(), Some(validator));
    let error = RwSignal::new(None::<String>);

    let action = move |values: RegisterFields| {
        let config = config.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        async move {
            error.set(None);
            let token = api::register(&config, &values.to_request()).await?;
            session.set(&token);
            navigate(&config.home_path, NavigateOptions::default());
            Ok::<(), ClientError>(())
        }
    };
    let on_submit = submit_handler(form, action, move |e: ClientError| {
        leptos::logging::warn!("registration failed: {e}");
        error.set(Some(format_error(&e)));
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-label">"Name"</label>
                    {text_input(form, RegisterField::Name, "text", "name")}
                    <label class="auth-label">"Email"</label>
                    {text_input(form, RegisterField::Email, "email", "email")}
                    <label class="auth-label">"Password"</label>
                    {text_input(form, RegisterField::Password, "password", "new-password")}
                    <button class="auth-button" type="submit" disabled=move || form.with(|f| f.is_submitting)>
                        {move || if form.with(|f| f.is_submitting) { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                {move || error.get().map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })}
                <p class="auth-switch">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
