//! Field validation rules shared by the auth forms.
//!
//! Each rule returns the user-facing message on failure so validators can
//! drop it straight into `FieldErrors`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() { Err(message) } else { Ok(()) }
}

/// Loose shape check; the server owns real address validation.
pub fn email_like(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    required(value, "Enter your email address.")?;
    let valid = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if valid && !value.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err("Enter a valid email address.")
    }
}

pub fn min_len(value: &str, min: usize, message: &'static str) -> Result<(), &'static str> {
    if value.chars().count() < min { Err(message) } else { Ok(()) }
}
