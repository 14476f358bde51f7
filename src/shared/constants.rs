/// Country stamped on every registration; the address hierarchy is Philippine-only
pub const COUNTRY: &str = "Philippines";

/// Minimum password length for the strength check
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Exact number of digits in a contact number
pub const CONTACT_NUMBER_DIGITS: usize = 11;
