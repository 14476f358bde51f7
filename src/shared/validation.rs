use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::CONTACT_NUMBER_DIGITS;

lazy_static! {
    /// Regex for validating email addresses
    /// Something without spaces or "@", an "@", then a dotted domain
    /// - Valid: "a@b.c", "juan.dela.cruz@up.edu.ph"
    /// - Invalid: "a@b", "a b@c.d", "@b.c", "a@@b.c"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Regex for validating mobile contact numbers (digits only, fixed length)
    /// - Valid: "09171234567"
    /// - Invalid: "0917123456", "+639171234567", "0917-123-4567"
    pub static ref CONTACT_REGEX: Regex =
        Regex::new(&format!(r"^[0-9]{{{}}}$", CONTACT_NUMBER_DIGITS)).unwrap();

    /// Character classes a strong password must contain, one regex per class
    pub static ref PASSWORD_CLASS_REGEXES: [Regex; 4] = [
        Regex::new(r"[a-z]").unwrap(),
        Regex::new(r"[A-Z]").unwrap(),
        Regex::new(r"[0-9]").unwrap(),
        // Anything that is not an ASCII letter or digit, underscore included
        Regex::new(r"[^A-Za-z0-9]").unwrap(),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex_valid() {
        assert!(EMAIL_REGEX.is_match("a@b.c"));
        assert!(EMAIL_REGEX.is_match("juan.dela.cruz@up.edu.ph"));
        assert!(EMAIL_REGEX.is_match("x+tag@mail.example.com"));
    }

    #[test]
    fn test_email_regex_invalid() {
        assert!(!EMAIL_REGEX.is_match("a@b")); // no dot in domain
        assert!(!EMAIL_REGEX.is_match("")); // empty
        assert!(!EMAIL_REGEX.is_match("@b.c")); // empty local part
        assert!(!EMAIL_REGEX.is_match("a b@c.d")); // space
        assert!(!EMAIL_REGEX.is_match("a@@b.c")); // double @
    }

    #[test]
    fn test_contact_regex() {
        assert!(CONTACT_REGEX.is_match("12345678901"));
        assert!(!CONTACT_REGEX.is_match("1234567890")); // 10 digits
        assert!(!CONTACT_REGEX.is_match("123456789012")); // 12 digits
        assert!(!CONTACT_REGEX.is_match("1234567890a"));
        assert!(!CONTACT_REGEX.is_match("+6391712345"));
    }

    #[test]
    fn test_password_class_regexes() {
        let [lower, upper, digit, special] = &*PASSWORD_CLASS_REGEXES;
        assert!(lower.is_match("aB1!") && !lower.is_match("AB1!"));
        assert!(upper.is_match("aB1!") && !upper.is_match("ab1!"));
        assert!(digit.is_match("aB1!") && !digit.is_match("aB!"));
        assert!(special.is_match("aB1!") && special.is_match("a_b"));
        assert!(!special.is_match("aB1"));
    }
}
