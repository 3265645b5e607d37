//! Form Validation
//!
//! Presence and positivity checks run before any request is built.

use crate::error::{Field, ValidationError};
use crate::models::{Credentials, ItemDraft};

/// Parse a strictly positive, finite number
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

pub fn parse_budget(raw: &str) -> Result<f64, ValidationError> {
    parse_positive(raw).ok_or(ValidationError::InvalidBudget)
}

/// Shared by the add form and the inline edit form
pub fn validate_item(name: &str, price: &str, imageurl: &str) -> Result<ItemDraft, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let price = parse_positive(price).ok_or(ValidationError::InvalidPrice)?;
    let imageurl = imageurl.trim();
    Ok(ItemDraft {
        name: name.to_string(),
        price,
        imageurl: (!imageurl.is_empty()).then(|| imageurl.to_string()),
    })
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail(Field::Email));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_signup(
    email: &str,
    password: &str,
    confirm: &str,
    min_len: usize,
) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail(Field::SignupEmail));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingNewPassword);
    }
    if password.chars().count() < min_len {
        return Err(ValidationError::PasswordTooShort { min: min_len });
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Live check for the confirmation field: only a non-empty mismatch is flagged
pub fn confirm_mismatch(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && password != confirm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_rejects_blank_zero_negative_and_garbage() {
        for raw in ["", "   ", "0", "-3", "abc", "NaN", "inf"] {
            assert_eq!(parse_budget(raw), Err(ValidationError::InvalidBudget), "input {:?}", raw);
        }
        assert_eq!(parse_budget(" 7.5 "), Ok(7.5));
    }

    #[test]
    fn test_item_checks_name_before_price() {
        assert_eq!(validate_item("  ", "0", ""), Err(ValidationError::MissingName));
        assert_eq!(validate_item("soup", "", ""), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_item("soup", "0", ""), Err(ValidationError::InvalidPrice));

        let draft = validate_item(" soup ", "4.25", "  ").unwrap();
        assert_eq!(draft.name, "soup");
        assert_eq!(draft.price, 4.25);
        assert_eq!(draft.imageurl, None);
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login(" ", "x"), Err(ValidationError::MissingEmail(Field::Email)));
        assert_eq!(validate_login("a@b.c", ""), Err(ValidationError::MissingPassword));
        assert_eq!(validate_login(" a@b.c ", "pw").unwrap().email, "a@b.c");
    }

    #[test]
    fn test_signup_rules_in_order() {
        assert_eq!(
            validate_signup("", "", "", 6),
            Err(ValidationError::MissingEmail(Field::SignupEmail))
        );
        assert_eq!(validate_signup("a@b.c", "", "", 6), Err(ValidationError::MissingNewPassword));
        assert_eq!(
            validate_signup("a@b.c", "12345", "12345", 6),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(
            validate_signup("a@b.c", "123456", "123457", 6),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_signup("a@b.c", "123456", "123456", 6).is_ok());
    }

    #[test]
    fn test_confirm_mismatch_ignores_empty_confirmation() {
        assert!(!confirm_mismatch("secret", ""));
        assert!(confirm_mismatch("secret", "sec"));
        assert!(!confirm_mismatch("secret", "secret"));
    }
}
