use crate::shared::constants::MIN_PASSWORD_LENGTH;
use crate::shared::validation::{CONTACT_REGEX, EMAIL_REGEX, PASSWORD_CLASS_REGEXES};

pub const EMAIL_INVALID: &str = "Invalid email format (must contain @ and domain)";
pub const EMAIL_VALID: &str = "Valid email";
pub const CONTACT_INVALID: &str = "Contact number must be exactly 11 digits.";
pub const CONTACT_VALID: &str = "Valid contact number";
pub const PASSWORD_INVALID: &str =
    "Password must have 8+ chars, uppercase, lowercase, number, special char.";
pub const PASSWORD_VALID: &str = "Strong password";

/// Advisory result of checking one field as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    /// Nothing typed, no message shown
    Empty,
    Invalid(&'static str),
    Valid(&'static str),
}

impl FieldCheck {
    fn from_match(value: &str, is_valid: bool, valid: &'static str, invalid: &'static str) -> Self {
        if value.is_empty() {
            FieldCheck::Empty
        } else if is_valid {
            FieldCheck::Valid(valid)
        } else {
            FieldCheck::Invalid(invalid)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid(_))
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldCheck::Empty => None,
            FieldCheck::Invalid(msg) | FieldCheck::Valid(msg) => Some(msg),
        }
    }
}

pub fn check_email(value: &str) -> FieldCheck {
    FieldCheck::from_match(value, EMAIL_REGEX.is_match(value), EMAIL_VALID, EMAIL_INVALID)
}

pub fn check_contact(value: &str) -> FieldCheck {
    FieldCheck::from_match(
        value,
        CONTACT_REGEX.is_match(value),
        CONTACT_VALID,
        CONTACT_INVALID,
    )
}

/// 8+ characters with a lowercase letter, an uppercase letter, a digit and a
/// non-alphanumeric character (underscore counts).
///
/// Length is counted in UTF-16 code units, so a character outside the BMP
/// counts twice, the same as the browser check on the sign-up page.
pub fn check_password(value: &str) -> FieldCheck {
    let strong = value.encode_utf16().count() >= MIN_PASSWORD_LENGTH
        && !value.contains(['\n', '\r'])
        && PASSWORD_CLASS_REGEXES.iter().all(|re| re.is_match(value));

    FieldCheck::from_match(value, strong, PASSWORD_VALID, PASSWORD_INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(check_email("a@b.c"), FieldCheck::Valid(EMAIL_VALID));
        assert_eq!(check_email("a@b"), FieldCheck::Invalid(EMAIL_INVALID));
        assert_eq!(check_email(""), FieldCheck::Empty);
    }

    #[test]
    fn test_contact() {
        assert!(check_contact("09171234567").is_valid());
        assert_eq!(check_contact("0917123456"), FieldCheck::Invalid(CONTACT_INVALID));
        assert_eq!(check_contact("1234567890a"), FieldCheck::Invalid(CONTACT_INVALID));
        assert_eq!(check_contact(""), FieldCheck::Empty);
    }

    #[test]
    fn test_password() {
        assert_eq!(check_password("Abcdef1!"), FieldCheck::Valid(PASSWORD_VALID));
        assert_eq!(check_password("abcdefgh"), FieldCheck::Invalid(PASSWORD_INVALID));
        assert!(check_password("Abcdef1_").is_valid());
        assert!(!check_password("Abcde1!").is_valid()); // 7 chars
        assert!(!check_password("ABCDEF1!").is_valid()); // no lowercase
        assert!(!check_password("Abcdefg!").is_valid()); // no digit
        assert!(!check_password("Abcdefg1").is_valid()); // no special
        assert_eq!(check_password(""), FieldCheck::Empty);
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 7 chars, 9 UTF-16 units
        assert!(check_password("Abc1!😀😀").is_valid());
        // 7 chars, 7 units
        assert!(!check_password("Abc1!éé").is_valid());
    }

    #[test]
    fn test_message() {
        assert_eq!(FieldCheck::Empty.message(), None);
        assert_eq!(check_email("x").message(), Some(EMAIL_INVALID));
    }
}
