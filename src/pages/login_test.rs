use super::*;
use crate::state::form::{FormState, SubmitGate};

#[test]
fn validate_login_requires_both_fields() {
    let errors = validate_login(&LoginFields::default());
    assert_eq!(errors.get(&LoginField::Email).map(String::as_str), Some("Enter your email address."));
    assert_eq!(errors.get(&LoginField::Password).map(String::as_str), Some("Enter your password."));
}

#[test]
fn validate_login_accepts_complete_input() {
    let values = LoginFields { email: "a@b.com".to_owned(), password: "secret".to_owned() };
    assert!(validate_login(&values).is_empty());
}

#[test]
fn to_request_trims_email_but_not_password() {
    let values = LoginFields { email: "  a@b.com ".to_owned(), password: " pw ".to_owned() };
    let req = values.to_request();
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, " pw ");
}

#[test]
fn login_form_walkthrough() {
    let validator: Validator<LoginFields> = Arc::new(validate_login);
    let mut form = FormState::new(LoginFields::default()).with_validator(validator);

    form.handle_change(&LoginField::Email, "a@b.com".to_owned());
    form.handle_blur(&LoginField::Email);
    assert_eq!(form.visible_error(&LoginField::Email), None);
    assert_eq!(form.visible_error(&LoginField::Password), None);
    assert_eq!(form.begin_submit(), SubmitGate::Invalid);
    assert_eq!(form.visible_error(&LoginField::Password), Some("Enter your password."));

    form.handle_change(&LoginField::Password, "pw".to_owned());
    let SubmitGate::Ready(values) = form.begin_submit() else {
        panic!("expected ready gate");
    };
    assert_eq!(values.email, "a@b.com");
    assert!(form.is_submitting);
}
