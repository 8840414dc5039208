use super::*;

#[test]
fn required_rejects_blank_input() {
    assert_eq!(required("   ", "Required"), Err("Required"));
    assert_eq!(required(" x ", "Required"), Ok(()));
}

#[test]
fn email_like_accepts_plain_addresses() {
    assert_eq!(email_like("a@b.com"), Ok(()));
    assert_eq!(email_like("  user.name@example.co.uk  "), Ok(()));
}

#[test]
fn email_like_requires_a_value() {
    assert_eq!(email_like(""), Err("Enter your email address."));
}

#[test]
fn email_like_rejects_malformed_addresses() {
    for bad in ["a", "a@", "@b.com", "a@b", "a@.com", "a@b.", "a b@c.com"] {
        assert_eq!(email_like(bad), Err("Enter a valid email address."), "{bad}");
    }
}

#[test]
fn min_len_counts_characters() {
    assert_eq!(min_len("ééééééé", MIN_PASSWORD_LEN, "short"), Err("short"));
    assert_eq!(min_len("éééééééé", MIN_PASSWORD_LEN, "short"), Ok(()));
}
